//! HTTP-обработчики страниц приложения.

pub mod analytics;
pub mod assistant;
pub mod feedback;
pub mod forecast;
pub mod i18n;
pub mod market_forecast;
pub mod pos_sales;
pub mod reports;
pub mod sales_report;
pub mod tasks;
pub mod trend_image;
pub mod trend_report;

use axum::{http::StatusCode, Json};
use contracts::shared::i18n::{Locale, LocaleParams};
use contracts::system::auth::TokenClaims;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::shared::data::db::get_connection;
use crate::shared::i18n::{translator, Localized};
use crate::shared::llm::{self, FlowError, LlmProvider};
use crate::system::settings;

/// Ошибка обработчика: статус и `{"error": <ключ перевода>, "message": <текст>}`.
/// Для сбоев LLM добавляется `detail` с технической причиной.
pub type ApiError = (StatusCode, Json<Value>);

pub fn localized_error(status: StatusCode, message: Localized) -> ApiError {
    (
        status,
        Json(json!({ "error": message.key, "message": message.text })),
    )
}

/// Ошибка по ключу перевода без подстановок
pub fn key_error(status: StatusCode, locale: Locale, key: &str) -> ApiError {
    localized_error(status, Localized::new(locale, key, &[]))
}

fn detailed_error(status: StatusCode, locale: Locale, key: &str, detail: String) -> ApiError {
    let message = Localized::new(locale, key, &[]);
    (
        status,
        Json(json!({ "error": message.key, "message": message.text, "detail": detail })),
    )
}

/// 500: подробности только в лог
pub fn internal_error(context: &str, e: impl std::fmt::Display) -> ApiError {
    tracing::error!("{}: {}", context, e);
    key_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        translator().default_locale(),
        "errors.generic",
    )
}

pub fn unauthorized() -> ApiError {
    key_error(
        StatusCode::UNAUTHORIZED,
        translator().default_locale(),
        "errors.unauthorized",
    )
}

pub fn not_found(locale: Locale) -> ApiError {
    key_error(StatusCode::NOT_FOUND, locale, "errors.notFound")
}

/// Ошибка входа потока: 400. Провайдер или ответ модели: 502
pub fn flow_error(e: FlowError, locale: Locale) -> ApiError {
    if e.is_validation() {
        detailed_error(StatusCode::BAD_REQUEST, locale, "errors.invalidRequest", e.to_string())
    } else {
        tracing::error!("Flow failed: {}", e);
        detailed_error(StatusCode::BAD_GATEWAY, locale, "errors.aiUnavailable", e.to_string())
    }
}

pub fn llm_provider(locale: Locale) -> Result<Arc<dyn LlmProvider>, ApiError> {
    llm::provider().map_err(|e| {
        tracing::error!("LLM provider unavailable: {}", e);
        detailed_error(StatusCode::BAD_GATEWAY, locale, "errors.aiUnavailable", e.to_string())
    })
}

/// `?lang=`, иначе сохранённый язык пользователя, иначе язык по умолчанию
pub async fn request_locale(claims: &TokenClaims, params: &LocaleParams) -> Locale {
    settings::service::resolve_locale(
        get_connection(),
        &claims.sub,
        params.lang,
        translator().default_locale(),
    )
    .await
}

pub fn invalid_id(locale: Locale, id: &str) -> ApiError {
    detailed_error(StatusCode::BAD_REQUEST, locale, "errors.invalidId", id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::LlmError;

    #[test]
    fn localized_body_carries_key_and_text() {
        let (status, Json(body)) = localized_error(
            StatusCode::BAD_REQUEST,
            Localized::new(Locale::En, "forecastPage.toast.skuMissingDescription", &[]),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "forecastPage.toast.skuMissingDescription");
        assert!(!body["message"].as_str().unwrap_or_default().is_empty());
        assert_ne!(body["message"], body["error"]);
    }

    #[test]
    fn flow_errors_split_into_400_and_502() {
        let (status, Json(body)) = flow_error(FlowError::InvalidInput("prompt".into()), Locale::En);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "errors.invalidRequest");
        assert_eq!(body["detail"], "Invalid input: prompt");

        let (status, Json(body)) =
            flow_error(FlowError::Provider(LlmError::RateLimitExceeded), Locale::Ja);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "errors.aiUnavailable");
        assert!(body["message"].is_string());
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let (status, Json(body)) = internal_error("db", "disk full");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "errors.generic");
        assert!(!body.to_string().contains("disk full"));
    }
}
