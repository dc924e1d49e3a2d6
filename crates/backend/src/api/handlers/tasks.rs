use axum::{
    extract::{Json, Path, Query},
    http::StatusCode,
};
use contracts::domain::a602_task::aggregate::{TaskId, TaskView, UpdateTaskStatusDto};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::LocaleParams;

use super::{internal_error, invalid_id, key_error, not_found, request_locale, ApiError};
use crate::domain::a602_task::service::{self, TaskError};
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/tasks
pub async fn list(
    CurrentUser(claims): CurrentUser,
    Query(params): Query<LocaleParams>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    service::list_views(get_connection(), locale)
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to list tasks", e))
}

/// GET /api/tasks/:id
pub async fn get_by_id(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<TaskView>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let task_id = TaskId::from_string(&id).map_err(|_| invalid_id(locale, &id))?;
    service::get_view(get_connection(), task_id, locale)
        .await
        .map_err(|e| internal_error("Failed to load task", e))?
        .map(Json)
        .ok_or_else(|| not_found(locale))
}

/// POST /api/tasks/:id/status
pub async fn update_status(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
    Json(dto): Json<UpdateTaskStatusDto>,
) -> Result<Json<TaskView>, ApiError> {
    let locale = request_locale(&claims, &params).await;
    let task_id = TaskId::from_string(&id).map_err(|_| invalid_id(locale, &id))?;

    match service::update_status(get_connection(), task_id, dto.status).await {
        Ok(task) => Ok(Json(service::to_view(task, locale))),
        Err(TaskError::NotFound) => Err(not_found(locale)),
        Err(TaskError::InvalidTransition(reason)) => {
            tracing::debug!("Rejected status change for {}: {}", id, reason);
            Err(key_error(StatusCode::BAD_REQUEST, locale, "errors.taskStatusFinal"))
        }
        Err(TaskError::Internal(e)) => Err(internal_error("Failed to update task", e)),
    }
}
