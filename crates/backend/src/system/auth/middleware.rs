use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::api::handlers::{unauthorized, ApiError};

/// Bearer token from the Authorization header
pub fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires valid JWT authentication.
/// Claims are put into request extensions for [`super::extractor::CurrentUser`].
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = bearer_token(&req).ok_or_else(unauthorized)?;

    let claims = super::jwt::validate_token(token).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        unauthorized()
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
