use axum::{
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::shared::i18n::LocaleParams;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserInfo,
    POST_LOGIN_REDIRECT,
};
use contracts::system::users::User;
use serde_json::json;

use crate::api::handlers::{internal_error, not_found, unauthorized, ApiError};
use crate::shared::data::db::get_connection;
use crate::shared::i18n::{t, translator};
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_tokens};
use crate::system::users::service::{self as user_service, RegisterError};

const LOGIN_ERROR_KEY: &str = "loginPage.loginErrorDescription";

fn user_info(user: User) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username,
        email: user.email,
    }
}

/// POST /api/system/auth/register
pub async fn register(
    Query(params): Query<LocaleParams>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let locale = params.lang.unwrap_or_else(|| translator().default_locale());

    match user_service::register(get_connection(), request).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user_info(user)))),
        Err(RegisterError::Field(field)) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": field.error,
                "field": field.field,
                "message": t(locale, &field.error),
            })),
        )),
        Err(RegisterError::Internal(e)) => Err(internal_error("Registration failed", e)),
    }
}

/// Login handler
pub async fn login(
    Query(params): Query<LocaleParams>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let locale = params.lang.unwrap_or_else(|| translator().default_locale());
    let conn = get_connection();

    let user = user_service::verify_credentials(conn, &request.email, &request.password)
        .await
        .map_err(|e| internal_error("Credential check failed", e))?
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": LOGIN_ERROR_KEY,
                    "message": t(locale, LOGIN_ERROR_KEY),
                })),
            )
        })?;

    let access_token = jwt::generate_access_token(&user.id, &user.email, &user.username)
        .map_err(|e| internal_error("Failed to issue access token", e))?;

    let refresh_token = jwt::generate_refresh_token();
    refresh_tokens::store(
        conn,
        &user.id,
        &refresh_token,
        &jwt::refresh_token_expiration(),
    )
    .await
    .map_err(|e| internal_error("Failed to store refresh token", e))?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user_info(user),
        redirect_to: POST_LOGIN_REDIRECT.to_string(),
    }))
}

/// Refresh token handler
pub async fn refresh(Json(request): Json<RefreshRequest>) -> Result<Json<RefreshResponse>, ApiError> {
    let conn = get_connection();

    let user_id = refresh_tokens::find_user_id(conn, &request.refresh_token)
        .await
        .map_err(|e| internal_error("Refresh token lookup failed", e))?
        .ok_or_else(unauthorized)?;

    let user = user_service::get_by_id(conn, &user_id)
        .await
        .map_err(|e| internal_error("User lookup failed", e))?
        .filter(|u| u.is_active)
        .ok_or_else(unauthorized)?;

    let access_token = jwt::generate_access_token(&user.id, &user.email, &user.username)
        .map_err(|e| internal_error("Failed to issue access token", e))?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, ApiError> {
    let revoked = refresh_tokens::revoke(get_connection(), &request.refresh_token)
        .await
        .map_err(|e| internal_error("Failed to revoke refresh token", e))?;
    if !revoked {
        tracing::debug!("Logout with unknown or already revoked refresh token");
    }
    Ok(StatusCode::OK)
}

/// Get current user handler (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, ApiError> {
    let user = user_service::get_by_id(get_connection(), &claims.sub)
        .await
        .map_err(|e| internal_error("User lookup failed", e))?
        .ok_or_else(|| not_found(translator().default_locale()))?;

    Ok(Json(user_info(user)))
}
