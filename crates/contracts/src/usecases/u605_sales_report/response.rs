use serde::{Deserialize, Serialize};

use crate::domain::a601_stored_report::aggregate::StoredReportId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSalesReportOutput {
    pub csv_data: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSalesReportResponse {
    pub csv_data: String,
    pub file_name: String,
    pub report_id: Option<StoredReportId>,
}
