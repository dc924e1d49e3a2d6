use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// Позиция каталога SKU для выбора на странице прогноза
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuItem {
    pub value: String,
    pub label_key: String,
    pub label: String,
    pub current_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDataPoint {
    pub period: String,
    #[serde(deserialize_with = "lenient::count")]
    pub forecasted_stock: u32,
}

/// Структурированный ответ LLM-потока прогноза остатков.
///
/// `current_stock` разбирается нестрого: поток всё равно заменяет его остатком из запроса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSalesOutput {
    pub sku_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub current_stock: u32,
    pub forecast_data: Vec<ForecastDataPoint>,
    pub reasoning: String,
    pub recommendations: String,
}

/// Точка графика "продажи / остаток"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastChartPoint {
    pub period: String,
    pub sales: u32,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSkuResponse {
    pub forecast: ForecastSalesOutput,
    pub chart: Vec<ForecastChartPoint>,
    /// Локализованный заголовок результата
    pub title: String,
}
