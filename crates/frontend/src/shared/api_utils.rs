//! Адреса API.
//!
//! Бэкенд раздаёт собранный фронтенд сам, поэтому API живёт на том же origin.

/// Базовый URL для запросов к API, например "http://localhost:3000"
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Полный URL по пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Добавить `lang=` к пути с учётом уже имеющегося query
pub fn with_lang(path: &str, lang: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}lang={}", path, separator, urlencoding::encode(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_is_appended_once() {
        assert_eq!(with_lang("/api/tasks", "ja"), "/api/tasks?lang=ja");
        assert_eq!(with_lang("/api/i18n/en/t?key=a", "en"), "/api/i18n/en/t?key=a&lang=en");
    }
}
