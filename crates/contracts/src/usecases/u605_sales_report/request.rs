use serde::{Deserialize, Serialize};

/// Параметры отчёта о продажах. Пока отчёт строится по всему набору данных.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSalesReportRequest {
    /// Сохранять ли отчёт в список отчётов пользователя
    #[serde(default = "default_store")]
    pub store: bool,
}

impl Default for GenerateSalesReportRequest {
    fn default() -> Self {
        Self { store: true }
    }
}

fn default_store() -> bool {
    true
}
