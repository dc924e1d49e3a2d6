use axum::{
    body::Bytes,
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::shared::i18n::{Locale, LocaleParams};
use contracts::usecases::u605_sales_report::request::GenerateSalesReportRequest;
use contracts::usecases::u605_sales_report::response::GenerateSalesReportResponse;

use super::{internal_error, key_error, request_locale, ApiError};
use crate::shared::data::db::get_connection;
use crate::shared::data::sources::MockSalesDataSource;
use crate::system::auth::extractor::CurrentUser;
use crate::usecases::u605_sales_report;

/// Пустое тело означает параметры по умолчанию, битый JSON отклоняется
fn parse_request(body: &[u8]) -> Result<GenerateSalesReportRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateSalesReportRequest::default());
    }
    serde_json::from_slice(body)
}

fn bad_body(locale: Locale, e: serde_json::Error) -> ApiError {
    tracing::debug!("Rejected sales report body: {}", e);
    key_error(StatusCode::BAD_REQUEST, locale, "errors.invalidRequest")
}

/// POST /api/reports/sales
pub async fn generate(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    body: Bytes,
) -> Result<Json<GenerateSalesReportResponse>, ApiError> {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => return Err(bad_body(request_locale(&claims, &params).await, e)),
    };
    u605_sales_report::generate(
        get_connection(),
        &MockSalesDataSource::default(),
        &claims.sub,
        &request,
    )
    .await
    .map(Json)
    .map_err(|e| internal_error("Failed to generate sales report", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_body_takes_defaults() {
        assert!(parse_request(b"").unwrap().store);
        assert!(parse_request(b"  \n").unwrap().store);
        assert!(parse_request(b"{}").unwrap().store);
        assert!(!parse_request(br#"{"store": false}"#).unwrap().store);
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_request(b"{\"store\": ").unwrap_err();
        let (status, Json(body)) = bad_body(Locale::En, err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "errors.invalidRequest");

        assert!(parse_request(br#"{"store": "yes"}"#).is_err());
    }
}
