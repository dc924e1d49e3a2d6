use contracts::usecases::u601_forecast_sku_stock::request::ForecastSkuRequest;
use contracts::usecases::u601_forecast_sku_stock::response::{ForecastSkuResponse, SkuItem};

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn list_skus(lang: &str) -> Result<Vec<SkuItem>, String> {
    api::get_json(&with_lang("/api/forecast/skus", lang)).await
}

pub async fn forecast(request: &ForecastSkuRequest, lang: &str) -> Result<ForecastSkuResponse, String> {
    api::post_json(&with_lang("/api/forecast", lang), request).await
}
