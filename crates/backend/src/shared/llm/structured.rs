//! Типизированные LLM-потоки: промпт по шаблону, один запрос, строгий разбор JSON.

use super::types::{ChatMessage, LlmError, LlmProvider};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Ошибки выполнения потока
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error("Model returned no output")]
    EmptyResponse,

    #[error("Model output is not valid JSON for the schema: {0}")]
    Decode(String),

    #[error("Model output failed validation: {0}")]
    InvalidOutput(String),
}

impl FlowError {
    /// Ошибка вызывающей стороны (400), а не сети / провайдера / модели
    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::InvalidInput(_))
    }
}

/// Описание одного потока
pub trait PromptFlow {
    const NAME: &'static str;

    type Input: Serialize + Send + Sync;
    type Output: DeserializeOwned + Serialize + Send;

    fn render_prompt(input: &Self::Input) -> String;

    /// JSON-схема ответа, передаётся модели в системном сообщении
    fn output_schema() -> Value;

    fn validate_input(_input: &Self::Input) -> Result<(), String> {
        Ok(())
    }

    fn validate_output(_output: &Self::Output) -> Result<(), String> {
        Ok(())
    }

    /// Последняя правка результата перед возвратом вызывающему
    fn finalize(_input: &Self::Input, output: Self::Output) -> Self::Output {
        output
    }
}

fn system_instruction(schema: &Value) -> String {
    format!(
        "You are Alyka, an AI assistant for B2B apparel trend analysis and sales forecasting.\n\
         Respond with exactly one JSON object that conforms to this JSON schema:\n{}\n\
         Do not wrap the object in prose. Every required field must be present.",
        schema
    )
}

/// Выполнить поток: ровно один запрос к провайдеру, без повторов
pub async fn run_flow<F: PromptFlow>(
    provider: &dyn LlmProvider,
    input: &F::Input,
) -> Result<F::Output, FlowError> {
    F::validate_input(input).map_err(FlowError::InvalidInput)?;

    let messages = vec![
        ChatMessage::system(system_instruction(&F::output_schema())),
        ChatMessage::user(F::render_prompt(input)),
    ];

    tracing::info!("Flow {} started ({})", F::NAME, provider.provider_name());
    let response = provider.chat_completion(messages).await.map_err(|e| {
        tracing::error!("Flow {} provider error: {}", F::NAME, e);
        FlowError::Provider(e)
    })?;
    tracing::debug!("Flow {} raw output: {}", F::NAME, response.content);

    let output: F::Output = decode_structured(&response.content).map_err(|e| {
        tracing::error!("Flow {} output rejected: {}", F::NAME, e);
        e
    })?;
    F::validate_output(&output).map_err(|e| {
        tracing::error!("Flow {} output invalid: {}", F::NAME, e);
        FlowError::InvalidOutput(e)
    })?;

    let output = F::finalize(input, output);
    tracing::info!(
        "Flow {} finished, tokens used: {:?}",
        F::NAME,
        response.tokens_used
    );
    Ok(output)
}

/// Строгий разбор ответа модели.
///
/// Допускается одна обрамляющая ограда ```json ... ```, иначе весь текст
/// должен быть JSON-объектом.
pub fn decode_structured<T: DeserializeOwned>(content: &str) -> Result<T, FlowError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(FlowError::EmptyResponse);
    }

    let body = match trimmed.strip_prefix("```") {
        Some(rest) => {
            let (first_line, inner) = rest.split_once('\n').unwrap_or((rest, ""));
            let lang = first_line.trim();
            if !lang.is_empty() && !lang.eq_ignore_ascii_case("json") {
                return Err(FlowError::Decode(format!("unexpected fenced block '{}'", lang)));
            }
            inner
                .trim_end()
                .strip_suffix("```")
                .ok_or_else(|| FlowError::Decode("unterminated code fence".into()))?
                .trim()
        }
        None => trimmed,
    };

    if body.is_empty() {
        return Err(FlowError::EmptyResponse);
    }
    if !body.starts_with('{') {
        return Err(FlowError::Decode("expected a JSON object".into()));
    }
    serde_json::from_str(body).map_err(|e| FlowError::Decode(e.to_string()))
}

/// Непустая строка после обрезки пробелов
pub fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::testing::RecordingProvider;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Echo {
        text: String,
    }

    struct EchoFlow;

    impl PromptFlow for EchoFlow {
        const NAME: &'static str = "echo";
        type Input = Echo;
        type Output = Echo;

        fn render_prompt(input: &Echo) -> String {
            format!("Repeat: {}", input.text)
        }

        fn output_schema() -> Value {
            json!({"type": "object", "required": ["text"], "properties": {"text": {"type": "string"}}})
        }

        fn validate_input(input: &Echo) -> Result<(), String> {
            require_text("text", &input.text)
        }

        fn validate_output(output: &Echo) -> Result<(), String> {
            require_text("text", &output.text)
        }
    }

    #[test]
    fn decodes_plain_and_fenced_objects() {
        let plain: Echo = decode_structured(" {\"text\":\"a\"} ").unwrap();
        assert_eq!(plain.text, "a");
        let fenced: Echo = decode_structured("```json\n{\"text\":\"b\"}\n```").unwrap();
        assert_eq!(fenced.text, "b");
        let bare_fence: Echo = decode_structured("```\n{\"text\":\"c\"}\n```").unwrap();
        assert_eq!(bare_fence.text, "c");
    }

    #[test]
    fn rejects_prose_and_missing_fields() {
        assert!(matches!(
            decode_structured::<Echo>("Sure! {\"text\":\"a\"}"),
            Err(FlowError::Decode(_))
        ));
        assert!(matches!(
            decode_structured::<Echo>("{\"other\":1}"),
            Err(FlowError::Decode(_))
        ));
        assert!(matches!(
            decode_structured::<Echo>("   "),
            Err(FlowError::EmptyResponse)
        ));
        assert!(matches!(
            decode_structured::<Echo>("```json\n{\"text\":\"a\"}"),
            Err(FlowError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn run_flow_sends_one_request_with_schema() {
        let provider = RecordingProvider::with_replies(vec!["{\"text\":\"hello\"}"]);
        let out = run_flow::<EchoFlow>(&provider, &Echo { text: "hello".into() })
            .await
            .unwrap();
        assert_eq!(out.text, "hello");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0][0].content.contains("\"required\""));
        assert_eq!(calls[0][1].content, "Repeat: hello");
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_provider() {
        let provider = RecordingProvider::with_replies(vec![]);
        let err = run_flow::<EchoFlow>(&provider, &Echo { text: " ".into() })
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_output_is_hard_failure() {
        let provider = RecordingProvider::with_replies(vec!["{\"text\":\"\"}"]);
        let err = run_flow::<EchoFlow>(&provider, &Echo { text: "x".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::InvalidOutput(_)));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn provider_error_is_propagated() {
        let provider = RecordingProvider::failing(LlmError::RateLimitExceeded);
        let err = run_flow::<EchoFlow>(&provider, &Echo { text: "x".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::Provider(LlmError::RateLimitExceeded)));
    }
}
