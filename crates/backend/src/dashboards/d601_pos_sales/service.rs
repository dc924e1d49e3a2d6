use crate::shared::data::sources::{category_key, SalesDataSource};
use crate::shared::format::{format_currency, format_thousands};
use crate::shared::i18n::t;
use contracts::dashboards::d601_pos_sales::dto::{
    CategorySales, MonthlySales, PosSalesEntry, PosSalesOverviewResponse, PosSalesSummary,
};
use contracts::shared::i18n::Locale;
use std::collections::{BTreeMap, HashMap};

pub const DETAIL_ROWS_LIMIT: usize = 50;

/// Помесячные итоги в хронологическом порядке
pub fn monthly_series(entries: &[PosSalesEntry]) -> Vec<MonthlySales> {
    // ключ `YYYY-MM-DD` сортируется хронологически
    let mut by_month: BTreeMap<&str, MonthlySales> = BTreeMap::new();
    for entry in entries {
        let month = by_month
            .entry(entry.month.as_str())
            .or_insert_with(|| MonthlySales {
                month_year: entry.month_year.clone(),
                revenue: 0,
                units: 0,
            });
        month.revenue += entry.revenue;
        month.units += entry.units_sold as u64;
    }
    by_month.into_values().collect()
}

pub fn summarize(entries: &[PosSalesEntry], monthly: &[MonthlySales]) -> PosSalesSummary {
    let total_revenue: u64 = entries.iter().map(|e| e.revenue).sum();
    let total_units_sold: u64 = entries.iter().map(|e| e.units_sold as u64).sum();

    let average_order_value = if total_units_sold == 0 {
        0.0
    } else {
        total_revenue as f64 / total_units_sold as f64
    };

    let revenue_change_pct = match monthly {
        [.., previous, last] if previous.revenue > 0 => Some(
            (last.revenue as f64 - previous.revenue as f64) / previous.revenue as f64 * 100.0,
        ),
        _ => None,
    };

    PosSalesSummary {
        total_revenue,
        total_units_sold,
        average_order_value,
        revenue_change_pct,
        total_revenue_display: format_currency(total_revenue),
        total_units_display: format_thousands(total_units_sold, ','),
    }
}

/// Выручка по категориям, по убыванию
pub fn revenue_by_category(entries: &[PosSalesEntry], locale: Locale) -> Vec<CategorySales> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for entry in entries {
        *totals.entry(entry.category.as_str()).or_default() += entry.revenue;
    }

    let mut result: Vec<CategorySales> = totals
        .into_iter()
        .map(|(category, revenue)| CategorySales {
            category: category.to_string(),
            label: category_key(category)
                .map(|key| t(locale, key))
                .unwrap_or_else(|| category.to_string()),
            revenue,
        })
        .collect();
    result.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.category.cmp(&b.category)));
    result
}

/// Детальные строки: последний месяц первым
pub fn latest_details(entries: &[PosSalesEntry], limit: usize) -> Vec<PosSalesEntry> {
    let mut rows = entries.to_vec();
    // стабильная сортировка сохраняет порядок товаров внутри месяца
    rows.sort_by(|a, b| b.month.cmp(&a.month));
    rows.truncate(limit);
    rows
}

pub fn get_overview(source: &dyn SalesDataSource, locale: Locale) -> PosSalesOverviewResponse {
    let entries = source.sales_entries();
    let monthly = monthly_series(&entries);
    let summary = summarize(&entries, &monthly);

    PosSalesOverviewResponse {
        summary,
        by_category: revenue_by_category(&entries, locale),
        details: latest_details(&entries, DETAIL_ROWS_LIMIT),
        monthly,
    }
}
