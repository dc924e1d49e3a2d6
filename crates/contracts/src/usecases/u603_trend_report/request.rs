use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReportInput {
    pub prompt: String,
}

/// HTTP-запрос: тот же промпт плюс признак сохранения в отчёты
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReportRequest {
    pub prompt: String,
    #[serde(default)]
    pub save_as_report: bool,
}
