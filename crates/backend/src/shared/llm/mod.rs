pub mod openai_provider;
pub mod structured;
#[cfg(test)]
pub mod testing;
pub mod types;

pub use structured::{decode_structured, require_text, run_flow, FlowError, PromptFlow};
pub use types::*;

use crate::shared::config::LlmConfig;
use once_cell::sync::OnceCell;
use openai_provider::OpenAiProvider;
use std::sync::Arc;

static PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Зарегистрировать провайдер из конфигурации. Без ключа сервер стартует,
/// но вызовы провайдера завершаются AuthError.
pub fn init_provider(config: &LlmConfig) {
    if config.api_key.trim().is_empty() {
        tracing::warn!("LLM API key is not set; AI flows will fail until it is configured");
    }
    let provider = OpenAiProvider::new(
        config.api_base.clone(),
        config.api_key.clone(),
        config.model.clone(),
        config.image_model.clone(),
        config.temperature,
        config.max_tokens,
    );
    tracing::info!(
        "LLM provider: {} (model {}, image model {})",
        provider.provider_name(),
        config.model,
        config.image_model
    );
    if PROVIDER.set(Arc::new(provider)).is_err() {
        tracing::warn!("LLM provider already initialized");
    }
}

/// Глобальный провайдер
pub fn provider() -> Result<Arc<dyn LlmProvider>, LlmError> {
    PROVIDER
        .get()
        .cloned()
        .ok_or_else(|| LlmError::AuthError("LLM provider is not initialized".into()))
}
