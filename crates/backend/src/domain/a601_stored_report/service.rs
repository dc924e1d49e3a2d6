use super::repository;
use contracts::domain::a601_stored_report::aggregate::{
    ReportType, StoredReport, StoredReportId, StoredReportListItem,
};
use sea_orm::DatabaseConnection;

/// Сохранить сгенерированный отчёт за пользователем
pub async fn save(
    conn: &DatabaseConnection,
    owner_id: &str,
    name: String,
    report_type: ReportType,
    csv_data: String,
) -> anyhow::Result<StoredReport> {
    let report = StoredReport::new_for_insert(owner_id.to_string(), name, report_type, csv_data);

    report
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(conn, &report).await?;
    tracing::info!("Stored report {} ({:?}) for {}", report.name, report.report_type, owner_id);
    Ok(report)
}

pub async fn list(conn: &DatabaseConnection, owner_id: &str) -> anyhow::Result<Vec<StoredReportListItem>> {
    Ok(repository::list_by_owner(conn, owner_id)
        .await?
        .iter()
        .map(StoredReport::to_list_item)
        .collect())
}

/// Отчёт другого пользователя не находится
pub async fn get(
    conn: &DatabaseConnection,
    owner_id: &str,
    id: StoredReportId,
) -> anyhow::Result<Option<StoredReport>> {
    repository::get_for_owner(conn, id, owner_id).await
}

pub async fn delete(conn: &DatabaseConnection, owner_id: &str, id: StoredReportId) -> anyhow::Result<bool> {
    repository::delete_for_owner(conn, id, owner_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn reports_are_scoped_to_owner() {
        let conn = test_connection().await;
        let report = save(
            &conn,
            "alice",
            "sales_report_2025-05-01.csv".into(),
            ReportType::SalesReport,
            "a,b\n1,2".into(),
        )
        .await
        .unwrap();

        assert!(get(&conn, "alice", report.id).await.unwrap().is_some());
        assert!(get(&conn, "bob", report.id).await.unwrap().is_none());
        assert!(list(&conn, "bob").await.unwrap().is_empty());
        assert!(!delete(&conn, "bob", report.id).await.unwrap());

        let listed = list(&conn, "alice").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].size_bytes, 7);
        assert_eq!(listed[0].report_type, ReportType::SalesReport);

        assert!(delete(&conn, "alice", report.id).await.unwrap());
        assert!(get(&conn, "alice", report.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn newest_first() {
        let conn = test_connection().await;
        let mut older = StoredReport::new_for_insert(
            "alice".into(),
            "old.csv".into(),
            ReportType::TrendAnalysis,
            String::new(),
        );
        older.date_generated = "2024-01-01T00:00:00+00:00".into();
        repository::insert(&conn, &older).await.unwrap();
        save(&conn, "alice", "new.csv".into(), ReportType::SalesReport, "x".into())
            .await
            .unwrap();

        let names: Vec<String> = list(&conn, "alice").await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["new.csv", "old.csv"]);
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let conn = test_connection().await;
        let result = save(&conn, "alice", " ".into(), ReportType::SalesReport, String::new()).await;
        assert!(result.is_err());
    }
}
