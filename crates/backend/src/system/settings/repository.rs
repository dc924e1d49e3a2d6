use anyhow::Result;
use contracts::shared::i18n::Locale;
use contracts::system::settings::UserSettings;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

pub async fn get(conn: &DatabaseConnection, user_id: &str) -> Result<Option<UserSettings>> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT language, email_notifications, in_app_notifications, dark_mode
             FROM sys_user_settings WHERE user_id = ?",
            [user_id.into()],
        ))
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let language: String = row.try_get("", "language")?;
    Ok(Some(UserSettings {
        // неизвестный язык в БД не ломает страницу настроек
        language: language.parse().unwrap_or_default(),
        email_notifications: row.try_get::<i32>("", "email_notifications")? != 0,
        in_app_notifications: row.try_get::<i32>("", "in_app_notifications")? != 0,
        dark_mode: row.try_get::<i32>("", "dark_mode")? != 0,
    }))
}

pub async fn upsert(conn: &DatabaseConnection, user_id: &str, settings: &UserSettings) -> Result<()> {
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_user_settings
            (user_id, language, email_notifications, in_app_notifications, dark_mode, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id) DO UPDATE SET
            language = excluded.language,
            email_notifications = excluded.email_notifications,
            in_app_notifications = excluded.in_app_notifications,
            dark_mode = excluded.dark_mode,
            updated_at = excluded.updated_at",
        [
            user_id.into(),
            settings.language.as_str().into(),
            (settings.email_notifications as i32).into(),
            (settings.in_app_notifications as i32).into(),
            (settings.dark_mode as i32).into(),
            chrono::Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;
    Ok(())
}

pub async fn get_language(conn: &DatabaseConnection, user_id: &str) -> Result<Option<Locale>> {
    Ok(get(conn, user_id).await?.map(|s| s.language))
}
