use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// ID сохранённого отчёта
    StoredReportId
);

/// Тип сохранённого отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Sales Report")]
    SalesReport,
    #[serde(rename = "Trend Analysis")]
    TrendAnalysis,
}

impl ReportType {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "sales_report" => Ok(ReportType::SalesReport),
            "trend_analysis" => Ok(ReportType::TrendAnalysis),
            _ => Err(format!("Unknown report type: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::SalesReport => "sales_report",
            ReportType::TrendAnalysis => "trend_analysis",
        }
    }
}

/// Сгенерированный отчёт, сохранённый за пользователем
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: StoredReportId,
    pub owner_id: String,
    /// Имя файла, предложенное генератором
    pub name: String,
    pub report_type: ReportType,
    /// ISO-8601 момент генерации
    pub date_generated: String,
    pub csv_data: String,
}

impl StoredReport {
    pub fn new_for_insert(
        owner_id: String,
        name: String,
        report_type: ReportType,
        csv_data: String,
    ) -> Self {
        Self {
            id: StoredReportId::new_v4(),
            owner_id,
            name,
            report_type,
            date_generated: chrono::Utc::now().to_rfc3339(),
            csv_data,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Report name cannot be empty".into());
        }
        if self.owner_id.trim().is_empty() {
            return Err("Report owner is required".into());
        }
        Ok(())
    }

    pub fn to_list_item(&self) -> StoredReportListItem {
        StoredReportListItem {
            id: self.id,
            name: self.name.clone(),
            report_type: self.report_type,
            date_generated: self.date_generated.clone(),
            size_bytes: self.csv_data.len(),
        }
    }
}

/// Строка списка отчётов (без тела CSV)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReportListItem {
    pub id: StoredReportId,
    pub name: String,
    pub report_type: ReportType,
    pub date_generated: String,
    pub size_bytes: usize,
}
