//! Переводы интерфейса.
//!
//! Словарь локали приходит с бэкенда (`GET /api/i18n/:locale`) уже со всеми
//! запасными слоями, так что здесь остаётся только поиск по ключу.

use contracts::shared::i18n::Locale;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::api;

const LOCALE_KEY: &str = "alyka_locale";

/// Значение по ключу вида "forecastPage.chart.salesLabel"
pub fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(bundle, |node, part| node.get(part))
        .and_then(Value::as_str)
}

/// Подставить `{{name}}`
pub fn interpolate(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
}

/// Сохранённый выбор, иначе язык браузера, иначе английский
pub fn detect_locale(stored: Option<&str>, navigator: Option<&str>) -> Locale {
    if let Some(locale) = stored.and_then(|s| s.parse().ok()) {
        return locale;
    }
    match navigator {
        Some(lang) if lang.to_ascii_lowercase().starts_with("ja") => Locale::Ja,
        _ => Locale::En,
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn initial_locale() -> Locale {
    let stored = local_storage().and_then(|s| s.get_item(LOCALE_KEY).ok().flatten());
    let navigator = web_sys::window().and_then(|w| w.navigator().language());
    detect_locale(stored.as_deref(), navigator.as_deref())
}

#[derive(Clone, Copy)]
pub struct I18n {
    pub locale: RwSignal<Locale>,
    bundle: RwSignal<Value>,
}

impl I18n {
    pub fn t(&self, key: &str) -> String {
        self.bundle
            .with(|bundle| lookup(bundle, key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }

    pub fn tr(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), replacements)
    }

    pub fn lang(&self) -> &'static str {
        self.locale.get_untracked().as_str()
    }

    /// Сменить язык и подгрузить его словарь
    pub fn set_locale(&self, locale: Locale) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(LOCALE_KEY, locale.as_str());
        }
        self.locale.set(locale);
        self.load(locale);
    }

    fn load(&self, locale: Locale) {
        let bundle = self.bundle;
        spawn_local(async move {
            match api::get_json::<Value>(&format!("/api/i18n/{}", locale)).await {
                Ok(value) => bundle.set(value),
                Err(e) => log::error!("Failed to load {} translations: {}", locale, e),
            }
        });
    }
}

/// Создать контекст переводов и загрузить словарь
pub fn provide_i18n() -> I18n {
    let locale = initial_locale();
    let i18n = I18n {
        locale: RwSignal::new(locale),
        bundle: RwSignal::new(Value::Null),
    };
    i18n.load(locale);
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_keys_resolve_to_strings() {
        let bundle = json!({"forecastPage": {"chart": {"salesLabel": "Sales"}}, "nav": {"analytics": 1}});
        assert_eq!(lookup(&bundle, "forecastPage.chart.salesLabel"), Some("Sales"));
        assert_eq!(lookup(&bundle, "forecastPage.chart"), None);
        assert_eq!(lookup(&bundle, "nav.analytics"), None);
        assert_eq!(lookup(&Value::Null, "nav.analytics"), None);
    }

    #[test]
    fn placeholders_are_replaced() {
        assert_eq!(
            interpolate("Next {{count}} months", &[("count", "6")]),
            "Next 6 months"
        );
        assert_eq!(interpolate("{{a}} {{b}}", &[("a", "x")]), "x {{b}}");
    }

    #[test]
    fn stored_choice_then_browser_language() {
        assert_eq!(detect_locale(Some("ja"), Some("en-US")), Locale::Ja);
        assert_eq!(detect_locale(Some("fr"), Some("ja-JP")), Locale::Ja);
        assert_eq!(detect_locale(None, Some("de")), Locale::En);
        assert_eq!(detect_locale(None, None), Locale::En);
    }
}
