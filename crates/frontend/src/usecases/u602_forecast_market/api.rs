use contracts::usecases::u602_forecast_market::request::MarketForecastInput;
use contracts::usecases::u602_forecast_market::response::MarketForecastOutput;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn forecast(input: &MarketForecastInput, lang: &str) -> Result<MarketForecastOutput, String> {
    api::post_json(&with_lang("/api/forecast/market", lang), input).await
}
