use contracts::usecases::u605_sales_report::request::GenerateSalesReportRequest;
use contracts::usecases::u605_sales_report::response::GenerateSalesReportResponse;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn generate(
    request: &GenerateSalesReportRequest,
    lang: &str,
) -> Result<GenerateSalesReportResponse, String> {
    api::post_json(&with_lang("/api/reports/sales", lang), request).await
}
