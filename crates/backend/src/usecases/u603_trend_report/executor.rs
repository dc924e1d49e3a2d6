use super::flow::TrendReportFlow;
use crate::domain::a601_stored_report;
use crate::shared::llm::{run_flow, FlowError, LlmProvider};
use chrono::NaiveDate;
use contracts::domain::a601_stored_report::aggregate::ReportType;
use contracts::usecases::u603_trend_report::request::{TrendReportInput, TrendReportRequest};
use contracts::usecases::u603_trend_report::response::TrendReportResponse;
use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendReportError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("trend_report_{}.csv", date.format("%Y-%m-%d"))
}

/// Одна строка данных: запрос и текст отчёта
pub fn report_csv(prompt: &str, report: &str) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(["Prompt", "Report"])?;
    writer.write_record([prompt, report])?;
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let text = String::from_utf8(bytes)?;
    Ok(text.trim_end_matches('\n').to_string())
}

pub async fn generate(
    conn: &DatabaseConnection,
    provider: &dyn LlmProvider,
    owner_id: &str,
    request: TrendReportRequest,
) -> Result<TrendReportResponse, TrendReportError> {
    let input = TrendReportInput {
        prompt: request.prompt,
    };
    let output = run_flow::<TrendReportFlow>(provider, &input).await?;

    let report_id = if request.save_as_report {
        let csv_data = report_csv(input.prompt.trim(), &output.report)?;
        let name = report_file_name(chrono::Utc::now().date_naive());
        let stored = a601_stored_report::service::save(
            conn,
            owner_id,
            name,
            ReportType::TrendAnalysis,
            csv_data,
        )
        .await?;
        Some(stored.id)
    } else {
        None
    };

    Ok(TrendReportResponse {
        report: output.report,
        report_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use crate::shared::llm::testing::RecordingProvider;

    #[test]
    fn csv_quotes_multiline_report() {
        let csv = report_csv("Spring 2025", "Line one\nSays \"bold\"").unwrap();
        assert_eq!(csv, "Prompt,Report\nSpring 2025,\"Line one\nSays \"\"bold\"\"\"");
    }

    #[tokio::test]
    async fn saved_report_is_listed_for_owner() {
        let conn = test_connection().await;
        let provider = RecordingProvider::with_replies(vec![r#"{"report":"Earth tones lead."}"#]);
        let response = generate(
            &conn,
            &provider,
            "u1",
            TrendReportRequest {
                prompt: "Autumn outerwear".into(),
                save_as_report: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(response.report, "Earth tones lead.");

        let id = response.report_id.unwrap();
        let stored = a601_stored_report::service::get(&conn, "u1", id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.report_type, ReportType::TrendAnalysis);
        assert!(stored.name.starts_with("trend_report_"));
        assert_eq!(stored.csv_data, "Prompt,Report\nAutumn outerwear,Earth tones lead.");
    }

    #[tokio::test]
    async fn unsaved_report_leaves_no_record() {
        let conn = test_connection().await;
        let provider = RecordingProvider::with_replies(vec![r#"{"report":"Pastels."}"#]);
        let response = generate(
            &conn,
            &provider,
            "u1",
            TrendReportRequest {
                prompt: "Spring".into(),
                save_as_report: false,
            },
        )
        .await
        .unwrap();
        assert!(response.report_id.is_none());
        assert!(a601_stored_report::service::list(&conn, "u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_report_is_rejected() {
        let conn = test_connection().await;
        let provider = RecordingProvider::with_replies(vec![r#"{"report":"  "}"#]);
        let err = generate(
            &conn,
            &provider,
            "u1",
            TrendReportRequest {
                prompt: "Spring".into(),
                save_as_report: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, TrendReportError::Flow(FlowError::InvalidOutput(_))));
    }
}
