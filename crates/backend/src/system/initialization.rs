use anyhow::Result;
use contracts::system::users::CreateUserDto;
use sea_orm::DatabaseConnection;

use crate::domain::a602_task;
use crate::shared::config::DemoUserConfig;
use crate::system::users::{repository, service::{self, RegisterError}};

/// Ensure demo user exists (create if its email is not registered yet)
pub async fn ensure_demo_user(conn: &DatabaseConnection, config: &DemoUserConfig) -> Result<()> {
    if !config.enabled {
        tracing::info!("Demo user disabled");
        return Ok(());
    }

    if repository::get_by_email(conn, &config.email).await?.is_some() {
        tracing::debug!("Demo user {} already exists", config.email);
        return Ok(());
    }

    let dto = CreateUserDto {
        username: config.username.clone(),
        email: config.email.clone(),
        password: config.password.clone(),
    };

    match service::create(conn, dto).await {
        Ok(user) => {
            tracing::warn!("═══════════════════════════════════════════════");
            tracing::warn!("  Demo user created!");
            tracing::warn!("  Email:    {}", user.email);
            tracing::warn!("  Username: {}", user.username);
            tracing::warn!("  Disable [demo_user] outside of demos.");
            tracing::warn!("═══════════════════════════════════════════════");
            Ok(())
        }
        Err(RegisterError::Field(field)) => {
            // имя занято другим пользователем
            tracing::warn!(
                "Demo user was not created: {} ({})",
                field.error,
                field.field
            );
            Ok(())
        }
        Err(RegisterError::Internal(e)) => Err(e),
    }
}

/// Начальные данные приложения
pub async fn seed_data(conn: &DatabaseConnection, demo_user: &DemoUserConfig) -> Result<()> {
    ensure_demo_user(conn, demo_user).await?;

    a602_task::service::seed_catalog_tasks(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn demo() -> DemoUserConfig {
        DemoUserConfig {
            enabled: true,
            username: "test".into(),
            email: "test@alyka.io".into(),
            password: "test12345".into(),
        }
    }

    #[tokio::test]
    async fn demo_user_can_log_in() {
        let conn = test_connection().await;
        seed_data(&conn, &demo()).await.unwrap();
        // повторный запуск ничего не дублирует
        seed_data(&conn, &demo()).await.unwrap();

        assert_eq!(repository::count_users(&conn).await.unwrap(), 1);
        let user = service::verify_credentials(&conn, "test@alyka.io", "test12345")
            .await
            .unwrap();
        assert!(user.is_some());
        assert_eq!(a602_task::repository::count(&conn).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn disabled_demo_user_is_not_created() {
        let conn = test_connection().await;
        let mut config = demo();
        config.enabled = false;
        ensure_demo_user(&conn, &config).await.unwrap();
        assert_eq!(repository::count_users(&conn).await.unwrap(), 0);
    }
}
