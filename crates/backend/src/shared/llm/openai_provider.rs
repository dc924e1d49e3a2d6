use super::types::{ChatMessage, ChatRole, ImageResponse, LlmError, LlmProvider, LlmResponse};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use serde::Deserialize;

/// OpenAI-совместимый провайдер: чат через async-openai, изображения через REST
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    image_model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    b64_json: Option<String>,
    revised_prompt: Option<String>,
}

impl OpenAiProvider {
    pub fn new(
        api_base: String,
        api_key: String,
        model: String,
        image_model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let api_base = api_base.trim_end_matches('/').to_string();
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(api_base.clone());
        let client = Client::with_config(config);

        Self {
            client,
            http: reqwest::Client::new(),
            api_base,
            api_key,
            model,
            image_model,
            temperature: temperature as f32,
            max_tokens: max_tokens.max(1) as u32,
        }
    }

    fn ensure_api_key(&self) -> Result<(), LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::AuthError("LLM API key is not configured".into()));
        }
        Ok(())
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        let mut openai_messages = Vec::with_capacity(messages.len());

        for msg in messages {
            let openai_msg = match msg.role {
                ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
                ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
                ChatRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(msg.content)
                    .build()
                    .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                    .into(),
            };
            openai_messages.push(openai_msg);
        }

        Ok(openai_messages)
    }

    /// Модели gpt-5 / o1 / o3 не принимают temperature и max_completion_tokens
    fn supports_advanced_params(model_id: &str) -> bool {
        !(model_id.starts_with("gpt-5") || model_id.starts_with("o1") || model_id.starts_with("o3"))
    }

    fn classify_error(message: String) -> LlmError {
        let lower = message.to_lowercase();
        if message.contains("401") || lower.contains("authentication") {
            LlmError::AuthError(message)
        } else if message.contains("429") || lower.contains("rate limit") {
            LlmError::RateLimitExceeded
        } else {
            LlmError::ApiError(message)
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        self.ensure_api_key()?;
        let openai_messages = self.convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(openai_messages);
        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Self::classify_error(e.to_string()))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        let content = choice.message.content.clone().unwrap_or_default();
        let finish_reason = choice.finish_reason.as_ref().map(|r| format!("{:?}", r));
        let tokens_used = response.usage.as_ref().map(|u| u.total_tokens as i32);

        Ok(LlmResponse {
            content,
            tokens_used,
            model: response.model.clone(),
            finish_reason,
        })
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImageResponse, LlmError> {
        self.ensure_api_key()?;
        let url = format!("{}/images/generations", self.api_base);
        let body = serde_json::json!({
            "model": self.image_model,
            "prompt": prompt,
            "n": 1,
            "size": "1024x1024",
            "response_format": "b64_json",
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(format!("{} {}", status.as_u16(), text)));
        }

        let parsed: ImagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ApiError(format!("Invalid images response: {}", e)))?;

        let datum = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::NoMedia("empty data array".into()))?;
        let b64 = datum
            .b64_json
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LlmError::NoMedia("b64_json is missing".into()))?;

        Ok(ImageResponse {
            data_uri: format!("data:image/png;base64,{}", b64),
            revised_prompt: datum.revised_prompt,
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_classified_by_status() {
        assert!(matches!(
            OpenAiProvider::classify_error("401 Unauthorized".into()),
            LlmError::AuthError(_)
        ));
        assert!(matches!(
            OpenAiProvider::classify_error("429 Too Many Requests".into()),
            LlmError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenAiProvider::classify_error("500 boom".into()),
            LlmError::ApiError(_)
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let provider = OpenAiProvider::new(
            "http://127.0.0.1:9/v1/".into(),
            String::new(),
            "gpt-4o-mini".into(),
            "dall-e-3".into(),
            0.7,
            256,
        );
        let result = provider.chat_completion(vec![ChatMessage::user("hi")]).await;
        assert!(matches!(result, Err(LlmError::AuthError(_))));
        let image = provider.generate_image("red").await;
        assert!(matches!(image, Err(LlmError::AuthError(_))));
    }
}
