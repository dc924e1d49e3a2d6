use serde::{Deserialize, Serialize};

/// Вход прогноза продаж по трендовому отчёту и рыночной ситуации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketForecastInput {
    pub trend_analysis_report: String,
    pub past_sales_data: String,
    pub market_conditions: String,
}
