use super::builder::build_sales_report;
use crate::domain::a601_stored_report;
use crate::shared::data::sources::SalesDataSource;
use contracts::domain::a601_stored_report::aggregate::ReportType;
use contracts::usecases::u605_sales_report::request::GenerateSalesReportRequest;
use contracts::usecases::u605_sales_report::response::GenerateSalesReportResponse;
use sea_orm::DatabaseConnection;

/// Построить отчёт и, если он не пуст, сохранить его за пользователем
pub async fn generate(
    conn: &DatabaseConnection,
    source: &dyn SalesDataSource,
    owner_id: &str,
    request: &GenerateSalesReportRequest,
) -> anyhow::Result<GenerateSalesReportResponse> {
    let output = build_sales_report(source, chrono::Utc::now().date_naive())?;

    let report_id = if request.store && !output.csv_data.is_empty() {
        let stored = a601_stored_report::service::save(
            conn,
            owner_id,
            output.file_name.clone(),
            ReportType::SalesReport,
            output.csv_data.clone(),
        )
        .await?;
        Some(stored.id)
    } else {
        None
    };

    tracing::info!(
        "Sales report {} generated ({} bytes)",
        output.file_name,
        output.csv_data.len()
    );

    Ok(GenerateSalesReportResponse {
        csv_data: output.csv_data,
        file_name: output.file_name,
        report_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use crate::shared::data::sources::MockSalesDataSource;
    use contracts::dashboards::d601_pos_sales::dto::PosSalesEntry;

    struct Empty;

    impl SalesDataSource for Empty {
        fn sales_entries(&self) -> Vec<PosSalesEntry> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn non_empty_report_is_stored() {
        let conn = test_connection().await;
        let response = generate(
            &conn,
            &MockSalesDataSource::default(),
            "u1",
            &GenerateSalesReportRequest::default(),
        )
        .await
        .unwrap();

        let id = response.report_id.unwrap();
        let stored = a601_stored_report::service::get(&conn, "u1", id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.csv_data, response.csv_data);
        assert_eq!(stored.name, response.file_name);
        assert_eq!(stored.report_type, ReportType::SalesReport);
    }

    #[tokio::test]
    async fn empty_report_is_not_stored() {
        let conn = test_connection().await;
        let response = generate(&conn, &Empty, "u1", &GenerateSalesReportRequest::default())
            .await
            .unwrap();
        assert!(response.report_id.is_none());
        assert!(response.file_name.starts_with("empty_sales_report_"));
        assert!(a601_stored_report::service::list(&conn, "u1").await.unwrap().is_empty());
    }
}
