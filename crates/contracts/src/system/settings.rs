use serde::{Deserialize, Serialize};

use crate::shared::i18n::Locale;

/// Пользовательские настройки приложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub language: Locale,
    pub email_notifications: bool,
    pub in_app_notifications: bool,
    pub dark_mode: bool,
}

impl UserSettings {
    pub fn defaults_for(language: Locale) -> Self {
        Self {
            language,
            email_notifications: true,
            in_app_notifications: true,
            dark_mode: false,
        }
    }
}
