use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketForecastOutput {
    pub overall_forecast: String,
    /// Прогноз по категориям / сегментам
    pub detailed_forecast: BTreeMap<String, String>,
    pub reasoning: String,
    pub recommendations: String,
}
