use serde::{Deserialize, Serialize};

use crate::usecases::u601_forecast_sku_stock::response::ForecastSkuResponse;
use crate::usecases::u605_sales_report::response::GenerateSalesReportResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssistantReply {
    Forecast(ForecastSkuResponse),
    SalesReport(GenerateSalesReportResponse),
    Message { title: String, text: String },
}
