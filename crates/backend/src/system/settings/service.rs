use anyhow::Result;
use contracts::shared::i18n::Locale;
use contracts::system::settings::UserSettings;
use sea_orm::DatabaseConnection;

use super::repository;

/// Настройки пользователя; если не сохранялись, значения по умолчанию
pub async fn get_for_user(
    conn: &DatabaseConnection,
    user_id: &str,
    default_locale: Locale,
) -> Result<UserSettings> {
    Ok(repository::get(conn, user_id)
        .await?
        .unwrap_or_else(|| UserSettings::defaults_for(default_locale)))
}

pub async fn save(
    conn: &DatabaseConnection,
    user_id: &str,
    settings: UserSettings,
) -> Result<UserSettings> {
    repository::upsert(conn, user_id, &settings).await?;
    tracing::info!("Settings saved for user {} ({})", user_id, settings.language);
    Ok(settings)
}

/// Язык ответа: явный `?lang=`, иначе сохранённый язык пользователя, иначе по умолчанию
pub async fn resolve_locale(
    conn: &DatabaseConnection,
    user_id: &str,
    requested: Option<Locale>,
    default_locale: Locale,
) -> Locale {
    if let Some(locale) = requested {
        return locale;
    }
    match repository::get_language(conn, user_id).await {
        Ok(Some(locale)) => locale,
        Ok(None) => default_locale,
        Err(e) => {
            tracing::warn!("Failed to read language for {}: {}", user_id, e);
            default_locale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn defaults_then_saved_values() {
        let conn = test_connection().await;
        let initial = get_for_user(&conn, "u1", Locale::En).await.unwrap();
        assert_eq!(initial, UserSettings::defaults_for(Locale::En));

        let mut changed = initial.clone();
        changed.language = Locale::Ja;
        changed.dark_mode = true;
        save(&conn, "u1", changed.clone()).await.unwrap();
        assert_eq!(get_for_user(&conn, "u1", Locale::En).await.unwrap(), changed);

        changed.email_notifications = false;
        save(&conn, "u1", changed.clone()).await.unwrap();
        assert_eq!(get_for_user(&conn, "u1", Locale::En).await.unwrap(), changed);
    }

    #[tokio::test]
    async fn locale_resolution_order() {
        let conn = test_connection().await;
        assert_eq!(resolve_locale(&conn, "u1", None, Locale::En).await, Locale::En);

        save(&conn, "u1", UserSettings::defaults_for(Locale::Ja)).await.unwrap();
        assert_eq!(resolve_locale(&conn, "u1", None, Locale::En).await, Locale::Ja);
        assert_eq!(
            resolve_locale(&conn, "u1", Some(Locale::En), Locale::En).await,
            Locale::En
        );
    }
}
