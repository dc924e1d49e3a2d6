use contracts::domain::a601_stored_report::aggregate::{StoredReportId, StoredReportListItem};
use contracts::domain::common::AggregateId;

use crate::shared::api;

pub async fn list() -> Result<Vec<StoredReportListItem>, String> {
    api::get_json("/api/reports").await
}

/// Текст CSV для скачивания
pub async fn download(id: StoredReportId) -> Result<String, String> {
    api::get_text(&format!("/api/reports/{}/download", id.as_string())).await
}

pub async fn delete(id: StoredReportId) -> Result<(), String> {
    api::delete(&format!("/api/reports/{}", id.as_string())).await
}
