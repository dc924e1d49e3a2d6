use contracts::usecases::u603_trend_report::request::TrendReportRequest;
use contracts::usecases::u603_trend_report::response::TrendReportResponse;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn generate(request: &TrendReportRequest, lang: &str) -> Result<TrendReportResponse, String> {
    api::post_json(&with_lang("/api/trend-report", lang), request).await
}
