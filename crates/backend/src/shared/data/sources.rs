//! Источники данных страниц и отчётов.
//!
//! Реальные POS-коннекторы не подключены: используются детерминированные
//! генераторы, реализующие те же трейты.

use chrono::NaiveDate;
use contracts::dashboards::d600_trend_analytics::dto::{PatternPoint, SilhouettePoint};
use contracts::dashboards::d601_pos_sales::dto::PosSalesEntry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Позиция каталога SKU
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSku {
    pub value: String,
    pub label_key: String,
    pub current_stock: u32,
}

pub trait SkuCatalog: Send + Sync {
    fn skus(&self) -> Vec<CatalogSku>;

    fn find(&self, value: &str) -> Option<CatalogSku> {
        self.skus().into_iter().find(|s| s.value == value)
    }
}

/// Товар отчёта о продажах
#[derive(Debug, Clone, Copy)]
pub struct ProductInfo {
    pub name: &'static str,
    pub category: &'static str,
    pub sku: &'static str,
    pub name_key: &'static str,
    pub category_key: &'static str,
}

pub const PRODUCTS: [ProductInfo; 6] = [
    ProductInfo {
        name: "Men's Wool Overcoat",
        category: "Outerwear",
        sku: "SKUWC001",
        name_key: "posSalesPage.products.woolCoat",
        category_key: "posSalesPage.categories.outerwear",
    },
    ProductInfo {
        name: "Women's Silk Blouse",
        category: "Tops",
        sku: "SKUSB002",
        name_key: "posSalesPage.products.silkBlouse",
        category_key: "posSalesPage.categories.tops",
    },
    ProductInfo {
        name: "Unisex Denim Jeans",
        category: "Bottoms",
        sku: "SKUDJ003",
        name_key: "posSalesPage.products.denimJeans",
        category_key: "posSalesPage.categories.bottoms",
    },
    ProductInfo {
        name: "Floral Summer Dress",
        category: "Dresses",
        sku: "SKUSD004",
        name_key: "posSalesPage.products.summerDress",
        category_key: "posSalesPage.categories.dresses",
    },
    ProductInfo {
        name: "Leather Shoulder Bag",
        category: "Accessories",
        sku: "SKULB005",
        name_key: "posSalesPage.products.leatherBag",
        category_key: "posSalesPage.categories.accessories",
    },
    ProductInfo {
        name: "Limited Edition Sneakers",
        category: "Footwear",
        sku: "SKUFS006",
        name_key: "posSalesPage.products.sneakers",
        category_key: "posSalesPage.categories.footwear",
    },
];

pub const STORE_LOCATIONS: [&str; 3] = ["Tokyo", "Osaka", "Hiroshima"];
pub const POS_NAME: &str = "Smartregi";

/// Ключ перевода категории по её английскому названию
pub fn category_key(category: &str) -> Option<&'static str> {
    PRODUCTS
        .iter()
        .find(|p| p.category == category)
        .map(|p| p.category_key)
}

pub trait SalesDataSource: Send + Sync {
    /// Строки продаж в хронологическом порядке
    fn sales_entries(&self) -> Vec<PosSalesEntry>;
}

/// Каталог SKU страницы прогноза
pub struct MockSkuCatalog;

impl SkuCatalog for MockSkuCatalog {
    fn skus(&self) -> Vec<CatalogSku> {
        [
            ("SKU001", "forecastPage.skus.classicWhiteTShirt", 1200),
            ("SKU002", "forecastPage.skus.skinnyBlueJeans", 800),
            ("SKU003", "forecastPage.skus.oversizedHoodieBlack", 1500),
            ("SKU004", "forecastPage.skus.stripedCottonPJs", 2000),
            ("SKU005", "forecastPage.skus.luxurySilkScarfFloral", 500),
        ]
        .into_iter()
        .map(|(value, label_key, current_stock)| CatalogSku {
            value: value.to_string(),
            label_key: label_key.to_string(),
            current_stock,
        })
        .collect()
    }
}

pub const DEFAULT_SALES_SEED: u64 = 20250501;

/// Помесячные продажи шести товаров; одинаковый seed даёт одинаковый набор
#[derive(Debug, Clone)]
pub struct MockSalesDataSource {
    pub seed: u64,
    /// (год, месяц) первого месяца
    pub first_month: (i32, u32),
    /// (год, месяц) последнего месяца включительно
    pub last_month: (i32, u32),
}

impl Default for MockSalesDataSource {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SALES_SEED,
            first_month: (2023, 1),
            last_month: (2025, 5),
        }
    }
}

impl MockSalesDataSource {
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    fn months(&self) -> Vec<NaiveDate> {
        let (mut year, mut month) = self.first_month;
        let mut result = Vec::new();
        while (year, month) <= self.last_month {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                result.push(date);
            }
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
        result
    }
}

impl SalesDataSource for MockSalesDataSource {
    fn sales_entries(&self) -> Vec<PosSalesEntry> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut entries = Vec::new();
        for month in self.months() {
            for product in PRODUCTS.iter() {
                let units_sold: u32 = rng.gen_range(10..=50);
                let price_per_unit: u32 = rng.gen_range(50..=200);
                let store = STORE_LOCATIONS[rng.gen_range(0..STORE_LOCATIONS.len())];
                entries.push(PosSalesEntry {
                    month: month.format("%Y-%m-%d").to_string(),
                    month_year: month.format("%b %Y").to_string(),
                    product_name: product.name.to_string(),
                    category: product.category.to_string(),
                    sku: product.sku.to_string(),
                    units_sold,
                    revenue: units_sold as u64 * price_per_unit as u64,
                    store_location: store.to_string(),
                    pos_name: POS_NAME.to_string(),
                });
            }
        }
        entries
    }
}

/// Популярность цвета сезона
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPopularity {
    pub name: &'static str,
    pub label_key: &'static str,
    pub description_key: &'static str,
    pub popularity: u32,
}

pub trait TrendDataSource: Send + Sync {
    fn silhouettes(&self) -> Vec<SilhouettePoint>;
    fn patterns(&self) -> Vec<PatternPoint>;
    fn colors(&self) -> Vec<ColorPopularity>;
}

const SILHOUETTES: [(&str, u32, u32, u32, u32, u32); 28] = [
    ("Jan-2023", 30, 40, 20, 35, 15),
    ("Feb-2023", 32, 42, 25, 30, 18),
    ("Mar-2023", 35, 38, 30, 28, 22),
    ("Apr-2023", 38, 35, 35, 30, 25),
    ("May-2023", 42, 32, 40, 32, 28),
    ("Jun-2023", 45, 30, 45, 35, 30),
    ("Jul-2023", 48, 28, 50, 38, 33),
    ("Aug-2023", 50, 25, 55, 40, 35),
    ("Sep-2023", 52, 22, 60, 42, 40),
    ("Oct-2023", 55, 20, 65, 45, 45),
    ("Nov-2023", 58, 18, 68, 42, 48),
    ("Dec-2023", 60, 15, 70, 40, 50),
    ("Jan-2024", 62, 18, 72, 38, 52),
    ("Feb-2024", 65, 20, 75, 35, 55),
    ("Mar-2024", 62, 22, 78, 38, 58),
    ("Apr-2024", 60, 25, 80, 40, 60),
    ("May-2024", 58, 28, 82, 42, 62),
    ("Jun-2024", 55, 30, 85, 45, 65),
    ("Jul-2024", 52, 32, 88, 48, 68),
    ("Aug-2024", 50, 35, 90, 50, 70),
    ("Sep-2024", 48, 38, 92, 52, 72),
    ("Oct-2024", 45, 40, 95, 55, 75),
    ("Nov-2024", 42, 42, 98, 58, 78),
    ("Dec-2024", 40, 45, 100, 60, 80),
    ("Jan-2025", 38, 48, 102, 62, 82),
    ("Feb-2025", 35, 50, 105, 65, 85),
    ("Mar-2025", 32, 52, 108, 68, 88),
    ("Apr-2025", 30, 55, 110, 70, 90),
];

const PATTERNS: [(&str, u32, u32, u32, u32, u32); 28] = [
    ("Jan-2023", 20, 15, 25, 10, 18),
    ("Feb-2023", 22, 17, 28, 12, 20),
    ("Mar-2023", 25, 20, 32, 15, 23),
    ("Apr-2023", 28, 22, 35, 18, 27),
    ("May-2023", 32, 25, 39, 22, 30),
    ("Jun-2023", 35, 28, 42, 25, 34),
    ("Jul-2023", 39, 32, 46, 29, 38),
    ("Aug-2023", 42, 35, 49, 33, 41),
    ("Sep-2023", 46, 38, 53, 37, 45),
    ("Oct-2023", 50, 42, 57, 41, 49),
    ("Nov-2023", 53, 45, 60, 45, 52),
    ("Dec-2023", 57, 48, 64, 48, 56),
    ("Jan-2024", 55, 52, 68, 52, 53),
    ("Feb-2024", 52, 55, 71, 55, 50),
    ("Mar-2024", 48, 59, 75, 59, 46),
    ("Apr-2024", 45, 62, 78, 63, 42),
    ("May-2024", 42, 65, 80, 65, 38),
    ("Jun-2024", 40, 68, 83, 68, 35),
    ("Jul-2024", 38, 72, 86, 71, 32),
    ("Aug-2024", 35, 75, 89, 74, 30),
    ("Sep-2024", 32, 78, 92, 77, 28),
    ("Oct-2024", 30, 82, 95, 80, 25),
    ("Nov-2024", 28, 85, 98, 83, 22),
    ("Dec-2024", 25, 88, 100, 86, 20),
    ("Jan-2025", 22, 92, 102, 89, 18),
    ("Feb-2025", 20, 95, 105, 92, 15),
    ("Mar-2025", 18, 98, 108, 95, 12),
    ("Apr-2025", 15, 100, 110, 98, 10),
];

pub struct MockTrendDataSource;

impl TrendDataSource for MockTrendDataSource {
    fn silhouettes(&self) -> Vec<SilhouettePoint> {
        SILHOUETTES
            .iter()
            .map(|&(month_year, a_line, sheath, oversized, bodycon, asymmetrical)| {
                SilhouettePoint {
                    month_year: month_year.to_string(),
                    a_line,
                    sheath,
                    oversized,
                    bodycon,
                    asymmetrical,
                }
            })
            .collect()
    }

    fn patterns(&self) -> Vec<PatternPoint> {
        PATTERNS
            .iter()
            .map(
                |&(month_year, floral, geometric, stripes, animal_prints, r#abstract)| PatternPoint {
                    month_year: month_year.to_string(),
                    floral,
                    geometric,
                    stripes,
                    animal_prints,
                    r#abstract,
                },
            )
            .collect()
    }

    fn colors(&self) -> Vec<ColorPopularity> {
        [
            ("Deep Sapphire", "deepSapphire", 400),
            ("Desert Khaki", "desertKhaki", 300),
            ("Rich Burgundy", "richBurgundy", 280),
            ("Forest Green", "forestGreen", 220),
            ("Warm Terracotta", "warmTerracotta", 180),
        ]
        .into_iter()
        .map(|(name, key, popularity)| ColorPopularity {
            name,
            label_key: color_label_key(key),
            description_key: color_description_key(key),
            popularity,
        })
        .collect()
    }
}

fn color_label_key(key: &str) -> &'static str {
    match key {
        "deepSapphire" => "analyticsPage.color.deepSapphire",
        "desertKhaki" => "analyticsPage.color.desertKhaki",
        "richBurgundy" => "analyticsPage.color.richBurgundy",
        "forestGreen" => "analyticsPage.color.forestGreen",
        _ => "analyticsPage.color.warmTerracotta",
    }
}

fn color_description_key(key: &str) -> &'static str {
    match key {
        "deepSapphire" => "analyticsPage.colorDescriptions.deepSapphire",
        "desertKhaki" => "analyticsPage.colorDescriptions.desertKhaki",
        "richBurgundy" => "analyticsPage.colorDescriptions.richBurgundy",
        "forestGreen" => "analyticsPage.colorDescriptions.forestGreen",
        _ => "analyticsPage.colorDescriptions.warmTerracotta",
    }
}
