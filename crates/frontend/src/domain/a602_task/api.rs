use contracts::domain::a602_task::aggregate::{TaskId, TaskStatus, TaskView, UpdateTaskStatusDto};
use contracts::domain::common::AggregateId;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn list(lang: &str) -> Result<Vec<TaskView>, String> {
    api::get_json(&with_lang("/api/tasks", lang)).await
}

pub async fn update_status(id: TaskId, status: TaskStatus, lang: &str) -> Result<TaskView, String> {
    let path = with_lang(&format!("/api/tasks/{}/status", id.as_string()), lang);
    api::post_json(&path, &UpdateTaskStatusDto { status }).await
}
