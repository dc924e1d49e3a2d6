use axum::extract::{Json, Query};
use contracts::dashboards::d600_trend_analytics::dto::TrendAnalyticsResponse;
use contracts::shared::i18n::LocaleParams;

use super::request_locale;
use crate::dashboards::d600_trend_analytics::service;
use crate::shared::data::sources::MockTrendDataSource;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/analytics/trends
pub async fn trends(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
) -> Json<TrendAnalyticsResponse> {
    let locale = request_locale(&claims, &params).await;
    Json(service::get_trend_analytics(&MockTrendDataSource, locale))
}
