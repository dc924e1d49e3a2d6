use axum::extract::Json;
use contracts::system::settings::UserSettings;

use crate::api::handlers::{internal_error, ApiError};
use crate::shared::data::db::get_connection;
use crate::shared::i18n::translator;
use crate::system::auth::extractor::CurrentUser;
use crate::system::settings::service;

/// GET /api/system/settings
pub async fn get_settings(CurrentUser(claims): CurrentUser) -> Result<Json<UserSettings>, ApiError> {
    service::get_for_user(get_connection(), &claims.sub, translator().default_locale())
        .await
        .map(Json)
        .map_err(|e| internal_error(&format!("Failed to load settings for {}", claims.sub), e))
}

/// PUT /api/system/settings
pub async fn save_settings(
    CurrentUser(claims): CurrentUser,
    Json(settings): Json<UserSettings>,
) -> Result<Json<UserSettings>, ApiError> {
    service::save(get_connection(), &claims.sub, settings)
        .await
        .map(Json)
        .map_err(|e| internal_error(&format!("Failed to save settings for {}", claims.sub), e))
}
