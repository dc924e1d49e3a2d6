use axum::extract::{Json, Query};
use contracts::shared::i18n::LocaleParams;
use contracts::usecases::u602_forecast_market::request::MarketForecastInput;
use contracts::usecases::u602_forecast_market::response::MarketForecastOutput;

use super::{flow_error, llm_provider, request_locale, ApiError};
use crate::shared::llm::run_flow;
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u602_forecast_market::MarketForecastFlow;

/// POST /api/forecast/market
pub async fn forecast_market(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(input): Json<MarketForecastInput>,
) -> Result<Json<MarketForecastOutput>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let provider = llm_provider(locale)?;
    run_flow::<MarketForecastFlow>(provider.as_ref(), &input)
        .await
        .map(Json)
        .map_err(|e| flow_error(e, locale))
}
