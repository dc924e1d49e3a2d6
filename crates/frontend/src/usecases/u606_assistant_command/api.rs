use contracts::usecases::u606_assistant_command::request::AssistantCommandRequest;
use contracts::usecases::u606_assistant_command::response::AssistantReply;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn send(request: &AssistantCommandRequest, lang: &str) -> Result<AssistantReply, String> {
    api::post_json(&with_lang("/api/assistant", lang), request).await
}
