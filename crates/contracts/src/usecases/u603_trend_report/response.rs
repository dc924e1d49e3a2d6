use serde::{Deserialize, Serialize};

use crate::domain::a601_stored_report::aggregate::StoredReportId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReportOutput {
    pub report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReportResponse {
    pub report: String,
    pub report_id: Option<StoredReportId>,
}
