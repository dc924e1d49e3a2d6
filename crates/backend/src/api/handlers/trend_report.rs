use axum::extract::{Json, Query};
use contracts::shared::i18n::LocaleParams;
use contracts::usecases::u603_trend_report::request::TrendReportRequest;
use contracts::usecases::u603_trend_report::response::TrendReportResponse;

use super::{flow_error, internal_error, llm_provider, request_locale, ApiError};
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u603_trend_report::{self, TrendReportError};

/// POST /api/trend-report
pub async fn generate(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(request): Json<TrendReportRequest>,
) -> Result<Json<TrendReportResponse>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let provider = llm_provider(locale)?;
    match u603_trend_report::generate(get_connection(), provider.as_ref(), &claims.sub, request).await {
        Ok(response) => Ok(Json(response)),
        Err(TrendReportError::Flow(e)) => Err(flow_error(e, locale)),
        Err(TrendReportError::Storage(e)) => Err(internal_error("Failed to store trend report", e)),
    }
}
