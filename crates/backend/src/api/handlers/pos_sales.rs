use axum::extract::{Json, Query};
use contracts::dashboards::d601_pos_sales::dto::PosSalesOverviewResponse;
use contracts::shared::i18n::LocaleParams;

use super::request_locale;
use crate::dashboards::d601_pos_sales::service;
use crate::shared::data::sources::MockSalesDataSource;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/pos-sales
pub async fn overview(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
) -> Json<PosSalesOverviewResponse> {
    let locale = request_locale(&claims, &params).await;
    Json(service::get_overview(&MockSalesDataSource::default(), locale))
}
