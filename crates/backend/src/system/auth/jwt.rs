use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config::AuthConfig;

const JWT_SECRET_KEY: &str = "jwt_secret";

struct JwtSettings {
    secret: String,
    access_token_hours: i64,
    refresh_token_days: i64,
}

static JWT_SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Подготовить секрет и сроки жизни токенов.
///
/// Секрет берётся из конфигурации, иначе из sys_settings; если его нет
/// и там, генерируется и сохраняется.
pub async fn initialize(conn: &DatabaseConnection, config: &AuthConfig) -> Result<()> {
    let secret = match config.jwt_secret.as_deref().map(str::trim) {
        Some(secret) if !secret.is_empty() => secret.to_string(),
        _ => load_or_create_secret(conn).await?,
    };
    let settings = JwtSettings {
        secret,
        access_token_hours: config.access_token_hours.max(1),
        refresh_token_days: config.refresh_token_days.max(1),
    };
    if JWT_SETTINGS.set(settings).is_err() {
        tracing::warn!("JWT settings already initialized");
    }
    Ok(())
}

fn settings() -> Result<&'static JwtSettings> {
    JWT_SETTINGS
        .get()
        .ok_or_else(|| anyhow::anyhow!("JWT settings have not been initialized"))
}

/// Get JWT secret from sys_settings or create a new one
pub async fn load_or_create_secret(conn: &DatabaseConnection) -> Result<String> {
    let existing = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    if let Some(row) = existing {
        let secret: String = row.try_get("", "value")?;
        return Ok(secret);
    }

    let secret = generate_jwt_secret();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_settings (key, value, updated_at) VALUES (?, ?, ?)",
        [
            JWT_SECRET_KEY.into(),
            secret.clone().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await
    .context("Failed to save JWT secret")?;
    tracing::info!("Generated new JWT secret");
    Ok(secret)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

pub fn build_claims(user_id: &str, email: &str, username: &str, lifetime_hours: i64) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

pub fn encode_claims(secret: &str, claims: &TokenClaims) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_claims(secret: &str, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Generate HS256 access token for the user
pub fn generate_access_token(user_id: &str, email: &str, username: &str) -> Result<String> {
    let settings = settings()?;
    let claims = build_claims(user_id, email, username, settings.access_token_hours);
    encode_claims(&settings.secret, &claims)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_claims(&settings()?.secret, token)
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Calculate refresh token expiration timestamp
pub fn refresh_token_expiration() -> String {
    let days = settings().map(|s| s.refresh_token_days).unwrap_or(30);
    (Utc::now() + chrono::Duration::days(days)).to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[test]
    fn claims_roundtrip_and_wrong_secret() {
        let claims = build_claims("u1", "test@alyka.io", "test", 1);
        let token = encode_claims("secret-a", &claims).unwrap();
        assert_eq!(decode_claims("secret-a", &token).unwrap(), claims);
        assert!(decode_claims("secret-b", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = build_claims("u1", "test@alyka.io", "test", -2);
        let token = encode_claims("secret", &claims).unwrap();
        assert!(decode_claims("secret", &token).is_err());
    }

    #[tokio::test]
    async fn secret_is_generated_once() {
        let conn = test_connection().await;
        let first = load_or_create_secret(&conn).await.unwrap();
        let second = load_or_create_secret(&conn).await.unwrap();
        assert_eq!(first, second);
        assert!(first.len() >= 40);
    }
}
