use serde::{Deserialize, Serialize};

use crate::shared::i18n::Locale;

/// Минимальный и максимальный горизонт прогноза в месяцах
pub const MIN_HORIZON_MONTHS: u32 = 3;
pub const MAX_HORIZON_MONTHS: u32 = 12;

/// Запрос страницы прогноза: выбранный SKU и горизонт
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSkuRequest {
    pub sku: String,
    pub horizon_months: u32,
    pub user_prompt: Option<String>,
}

/// Вход LLM-потока прогноза остатков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSalesInput {
    pub sku_name: String,
    pub current_stock: u32,
    /// Например, "next 3 months"
    pub forecast_horizon: String,
    pub target_language: Locale,
    pub user_prompt: Option<String>,
}
