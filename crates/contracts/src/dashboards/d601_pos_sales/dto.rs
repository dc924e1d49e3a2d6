use serde::{Deserialize, Serialize};

/// Строка POS-продаж за месяц по товару
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosSalesEntry {
    /// Первый день месяца, `YYYY-MM-DD`
    pub month: String,
    /// `MMM yyyy`, например "Jan 2023"
    pub month_year: String,
    pub product_name: String,
    pub category: String,
    pub sku: String,
    pub units_sold: u32,
    pub revenue: u64,
    pub store_location: String,
    pub pos_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month_year: String,
    pub revenue: u64,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub label: String,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosSalesSummary {
    pub total_revenue: u64,
    pub total_units_sold: u64,
    /// Средняя выручка на проданную единицу
    pub average_order_value: f64,
    /// Изменение выручки последнего месяца к предыдущему, %
    pub revenue_change_pct: Option<f64>,
    pub total_revenue_display: String,
    pub total_units_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosSalesOverviewResponse {
    pub summary: PosSalesSummary,
    pub monthly: Vec<MonthlySales>,
    pub by_category: Vec<CategorySales>,
    pub details: Vec<PosSalesEntry>,
}
