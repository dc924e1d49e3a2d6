use axum::{
    extract::{Json, Query},
    http::StatusCode,
};
use contracts::domain::a603_feedback::aggregate::{Feedback, SubmitFeedbackDto};
use contracts::shared::i18n::LocaleParams;

use super::{internal_error, key_error, request_locale, ApiError};
use crate::domain::a603_feedback::service::{self, FeedbackError, EMPTY_FEEDBACK_KEY};
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;

/// POST /api/feedback
pub async fn submit(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
    Json(dto): Json<SubmitFeedbackDto>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    match service::submit(get_connection(), &claims.sub, dto).await {
        Ok(feedback) => Ok((StatusCode::CREATED, Json(feedback))),
        Err(FeedbackError::Empty) => {
            let locale = request_locale(&claims, &params).await;
            Err(key_error(StatusCode::BAD_REQUEST, locale, EMPTY_FEEDBACK_KEY))
        }
        Err(FeedbackError::Internal(e)) => Err(internal_error("Failed to store feedback", e)),
    }
}
