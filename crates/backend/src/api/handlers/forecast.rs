use axum::{
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::shared::i18n::{Locale, LocaleParams};
use contracts::usecases::u601_forecast_sku_stock::request::ForecastSkuRequest;
use contracts::usecases::u601_forecast_sku_stock::response::{ForecastSkuResponse, SkuItem};

use super::{flow_error, llm_provider, localized_error, request_locale, ApiError};
use crate::shared::data::sources::MockSkuCatalog;
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u601_forecast_sku_stock::{self, ForecastError};

pub(super) fn forecast_error(e: ForecastError, locale: Locale) -> ApiError {
    match e {
        ForecastError::Validation(message) => localized_error(StatusCode::BAD_REQUEST, message),
        ForecastError::Flow(e) => flow_error(e, locale),
    }
}

/// GET /api/forecast/skus
pub async fn list_skus(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
) -> Json<Vec<SkuItem>> {
    let locale = request_locale(&claims, &params).await;
    Json(u601_forecast_sku_stock::list_skus(&MockSkuCatalog, locale))
}

/// POST /api/forecast
pub async fn forecast(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(request): Json<ForecastSkuRequest>,
) -> Result<Json<ForecastSkuResponse>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let provider = llm_provider(locale)?;

    u601_forecast_sku_stock::forecast_sku(provider.as_ref(), &MockSkuCatalog, &request, locale)
        .await
        .map(Json)
        .map_err(|e| forecast_error(e, locale))
}
