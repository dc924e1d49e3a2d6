use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use contracts::system::auth::TokenClaims;

use crate::api::handlers::{unauthorized, ApiError};

/// Текущий пользователь из JWT (кладётся в extensions middleware `require_auth`).
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser) -> Response`
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(unauthorized)
    }
}
