use serde::{Deserialize, Serialize};

/// Сообщение из чата страницы прогноза или диалога ассистента
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantCommandRequest {
    pub message: String,
    pub sku: Option<String>,
    pub horizon_months: Option<u32>,
}
