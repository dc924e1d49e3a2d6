use axum::{
    extract::{Json, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
};
use contracts::domain::a601_stored_report::aggregate::{
    StoredReport, StoredReportId, StoredReportListItem,
};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::{Locale, LocaleParams};

use super::{internal_error, invalid_id, not_found, request_locale, ApiError};
use crate::domain::a601_stored_report;
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;

fn parse_id(locale: Locale, id: &str) -> Result<StoredReportId, ApiError> {
    StoredReportId::from_string(id).map_err(|_| invalid_id(locale, id))
}

async fn load(owner_id: &str, id: &str, locale: Locale) -> Result<StoredReport, ApiError> {
    let id = parse_id(locale, id)?;
    a601_stored_report::service::get(get_connection(), owner_id, id)
        .await
        .map_err(|e| internal_error("Failed to load report", e))?
        .ok_or_else(|| not_found(locale))
}

/// GET /api/reports
pub async fn list(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<Vec<StoredReportListItem>>, ApiError> {
    a601_stored_report::service::list(get_connection(), &claims.sub)
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to list reports", e))
}

/// GET /api/reports/:id
pub async fn get_by_id(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<StoredReport>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    load(&claims.sub, &id, locale).await.map(Json)
}

/// GET /api/reports/:id/download
pub async fn download(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<impl IntoResponse, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let report = load(&claims.sub, &id, locale).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        report.name.replace('"', ""),
        urlencoding::encode(&report.name)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.csv_data,
    ))
}

/// DELETE /api/reports/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<StatusCode, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let report_id = parse_id(locale, &id)?;
    match a601_stored_report::service::delete(get_connection(), &claims.sub, report_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(not_found(locale)),
        Err(e) => Err(internal_error("Failed to delete report", e)),
    }
}
