//! Тестовый провайдер: отдаёт заготовленные ответы и записывает запросы.

use super::types::{ChatMessage, ImageResponse, LlmError, LlmProvider, LlmResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingProvider {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    image: Mutex<Option<Result<ImageResponse, LlmError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
    image_prompts: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn with_replies(replies: Vec<&str>) -> Self {
        let provider = Self::default();
        if let Ok(mut queue) = provider.replies.lock() {
            queue.extend(replies.into_iter().map(|r| Ok(r.to_string())));
        }
        provider
    }

    pub fn failing(error: LlmError) -> Self {
        let provider = Self::default();
        if let Ok(mut queue) = provider.replies.lock() {
            queue.push_back(Err(error));
        }
        provider
    }

    pub fn with_image(result: Result<ImageResponse, LlmError>) -> Self {
        let provider = Self::default();
        if let Ok(mut image) = provider.image.lock() {
            *image = Some(result);
        }
        provider
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages);
        }
        let next = self.replies.lock().ok().and_then(|mut q| q.pop_front());
        let content = next.unwrap_or_else(|| Err(LlmError::ApiError("no scripted reply".into())))?;
        Ok(LlmResponse {
            content,
            tokens_used: Some(42),
            model: "recording".into(),
            finish_reason: Some("Stop".into()),
        })
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImageResponse, LlmError> {
        if let Ok(mut prompts) = self.image_prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.image
            .lock()
            .ok()
            .and_then(|mut i| i.take())
            .unwrap_or_else(|| Err(LlmError::NoMedia("no scripted image".into())))
    }

    fn provider_name(&self) -> &str {
        "Recording"
    }
}
