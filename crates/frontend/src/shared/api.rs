//! HTTP-клиент приложения: Bearer-токен из хранилища, ошибки в виде текста для пользователя.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::storage;

/// Текст ошибки из тела `{"error": <ключ>, "message": <текст>}`.
/// Если тела нет или оно другое, остаётся код статуса.
pub fn error_text(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    };
    field("message")
        .or_else(|| field("error"))
        .unwrap_or_else(|| format!("HTTP error: {}", status))
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn checked(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_text(status, &body))
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    checked(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse(response).await
}

pub async fn send_json<B, T>(method: &str, path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let builder = match method {
        "PUT" => Request::put(&url),
        _ => Request::post(&url),
    };
    let response = authorized(builder)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_json("POST", path, body).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_json("PUT", path, body).await
}

pub async fn get_text(path: &str) -> Result<String, String> {
    let response = authorized(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response)
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    checked(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wins_over_key() {
        let body = r#"{"error":"errors.notFound","message":"The requested item was not found."}"#;
        assert_eq!(error_text(404, body), "The requested item was not found.");
    }

    #[test]
    fn key_or_status_when_no_message() {
        assert_eq!(error_text(400, r#"{"error":"errors.invalidId"}"#), "errors.invalidId");
        assert_eq!(error_text(502, ""), "HTTP error: 502");
        assert_eq!(error_text(500, r#"{"message":"  "}"#), "HTTP error: 500");
    }
}
