//! Хранилище refresh-токенов: в БД лежит только SHA-256 хэш.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use sha2::{Digest, Sha256};

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub async fn store(
    conn: &DatabaseConnection,
    user_id: &str,
    token: &str,
    expires_at: &str,
) -> Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            uuid::Uuid::new_v4().to_string().into(),
            user_id.to_string().into(),
            hash_token(token).into(),
            expires_at.to_string().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;
    Ok(())
}

/// User id for a live (not expired, not revoked) refresh token
pub async fn find_user_id(conn: &DatabaseConnection, token: &str) -> Result<Option<String>> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), Utc::now().to_rfc3339().into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

/// Revoke token; returns false when nothing was revoked
pub async fn revoke(conn: &DatabaseConnection, token: &str) -> Result<bool> {
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ? AND revoked_at IS NULL",
            [Utc::now().to_rfc3339().into(), hash_token(token).into()],
        ))
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    async fn insert_user(conn: &DatabaseConnection, id: &str) {
        let now = Utc::now().to_rfc3339();
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_users (id, username, email, password_hash, is_active, created_at, updated_at)
             VALUES (?, ?, ?, 'x', 1, ?, ?)",
            [
                id.into(),
                format!("user-{}", id).into(),
                format!("{}@alyka.io", id).into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn store_find_revoke() {
        let conn = test_connection().await;
        insert_user(&conn, "u1").await;
        let future = (Utc::now() + chrono::Duration::days(1)).to_rfc3339();
        store(&conn, "u1", "tok", &future).await.unwrap();

        assert_eq!(find_user_id(&conn, "tok").await.unwrap().as_deref(), Some("u1"));
        assert!(find_user_id(&conn, "other").await.unwrap().is_none());

        assert!(revoke(&conn, "tok").await.unwrap());
        assert!(!revoke(&conn, "tok").await.unwrap());
        assert!(find_user_id(&conn, "tok").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_token_is_not_found() {
        let conn = test_connection().await;
        insert_user(&conn, "u2").await;
        let past = (Utc::now() - chrono::Duration::hours(1)).to_rfc3339();
        store(&conn, "u2", "old", &past).await.unwrap();
        assert!(find_user_id(&conn, "old").await.unwrap().is_none());
    }

    #[test]
    fn hash_is_hex_sha256() {
        assert_eq!(hash_token("abc").len(), 64);
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }
}
