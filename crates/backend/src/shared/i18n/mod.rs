//! Словари интерфейса и единая функция разрешения ключей.
//!
//! Порядок поиска: запрошенная локаль, локаль по умолчанию, английский словарь,
//! затем сам ключ.

use contracts::shared::i18n::Locale;
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use std::collections::HashMap;

const EN_JSON: &str = include_str!("../../../locales/en.json");
const JA_JSON: &str = include_str!("../../../locales/ja.json");

static TRANSLATOR: OnceCell<Translator> = OnceCell::new();

pub struct Translator {
    default_locale: Locale,
    dictionaries: HashMap<Locale, Value>,
}

impl Translator {
    pub fn new(default_locale: Locale) -> anyhow::Result<Self> {
        let mut dictionaries = HashMap::new();
        for locale in Locale::ALL {
            let raw = match locale {
                Locale::En => EN_JSON,
                Locale::Ja => JA_JSON,
            };
            let parsed: Value = serde_json::from_str(raw)
                .map_err(|e| anyhow::anyhow!("Invalid dictionary {}: {}", locale, e))?;
            dictionaries.insert(locale, parsed);
        }
        Ok(Self {
            default_locale,
            dictionaries,
        })
    }

    #[cfg(test)]
    fn from_values(default_locale: Locale, dictionaries: Vec<(Locale, Value)>) -> Self {
        Self {
            default_locale,
            dictionaries: dictionaries.into_iter().collect(),
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.dictionaries.get(&locale)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }

    /// Перевести ключ вида `forecastPage.toast.errorTitle`.
    ///
    /// `{{name}}` в найденной строке заменяется значением из `replacements`.
    pub fn translate(&self, locale: Locale, key: &str, replacements: &[(&str, &str)]) -> String {
        let found = self
            .lookup(locale, key)
            .or_else(|| self.lookup(self.default_locale, key))
            .or_else(|| self.lookup(Locale::En, key));

        let Some(text) = found else {
            tracing::debug!("Missing translation for key '{}' ({})", key, locale);
            return key.to_string();
        };

        let mut result = text.to_string();
        for (name, value) in replacements {
            result = result.replace(&format!("{{{{{}}}}}", name), value);
        }
        result
    }

    /// Сокращение для `translate` без подстановок
    pub fn t(&self, locale: Locale, key: &str) -> String {
        self.translate(locale, key, &[])
    }

    /// Полный словарь локали: английская база, поверх неё локаль по умолчанию,
    /// поверх запрошенная локаль
    pub fn bundle(&self, locale: Locale) -> Value {
        let mut merged = self
            .dictionaries
            .get(&Locale::En)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        for layer in [self.default_locale, locale] {
            if let Some(overlay) = self.dictionaries.get(&layer) {
                deep_merge(&mut merged, overlay);
            }
        }
        merged
    }
}

fn deep_merge(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Object(target_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match target_map.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value)
                    }
                    _ => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, overlay) => *target = overlay.clone(),
    }
}

/// Инициализировать глобальный переводчик с локалью по умолчанию из конфигурации
pub fn init_translator(default_locale: Locale) -> anyhow::Result<()> {
    let translator = Translator::new(default_locale)?;
    if TRANSLATOR.set(translator).is_err() {
        tracing::warn!("Translator already initialized");
    }
    Ok(())
}

/// Глобальный переводчик
pub fn translator() -> &'static Translator {
    TRANSLATOR.get_or_init(|| {
        Translator::new(Locale::En).unwrap_or_else(|_| Translator {
            default_locale: Locale::En,
            dictionaries: HashMap::new(),
        })
    })
}

/// Перевести ключ глобальным переводчиком
pub fn t(locale: Locale, key: &str) -> String {
    translator().t(locale, key)
}

/// Перевести ключ глобальным переводчиком с подстановками
pub fn tr(locale: Locale, key: &str, replacements: &[(&str, &str)]) -> String {
    translator().translate(locale, key, replacements)
}

/// Ключ перевода вместе с переведённым текстом.
///
/// Ошибки для пользователя несут оба: клиент может перевести ключ сам.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub key: String,
    pub text: String,
}

impl Localized {
    pub fn new(locale: Locale, key: &str, replacements: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            text: tr(locale, key, replacements),
        }
    }
}

impl std::fmt::Display for Localized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn small() -> Translator {
        Translator::from_values(
            Locale::En,
            vec![
                (
                    Locale::En,
                    json!({"page": {"title": "Title", "only_en": "English only", "hello": "Hi {{name}}, {{name}}!"}}),
                ),
                (Locale::Ja, json!({"page": {"title": "タイトル"}})),
            ],
        )
    }

    #[test]
    fn existing_key_is_localized() {
        assert_eq!(small().t(Locale::Ja, "page.title"), "タイトル");
        assert_eq!(small().t(Locale::En, "page.title"), "Title");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        assert_eq!(small().t(Locale::Ja, "page.only_en"), "English only");
    }

    #[test]
    fn missing_everywhere_returns_key() {
        assert_eq!(small().t(Locale::Ja, "page.nothing"), "page.nothing");
        // не-строковый узел тоже не перевод
        assert_eq!(small().t(Locale::En, "page"), "page");
    }

    #[test]
    fn english_is_last_resort_when_default_is_japanese() {
        let translator = Translator::from_values(
            Locale::Ja,
            vec![
                (
                    Locale::En,
                    json!({"page": {"title": "Title", "only_en": "English only"}}),
                ),
                (Locale::Ja, json!({"page": {"title": "タイトル"}})),
            ],
        );
        assert_eq!(translator.t(Locale::Ja, "page.only_en"), "English only");
        assert_eq!(translator.t(Locale::En, "page.title"), "Title");
        assert_eq!(translator.t(Locale::Ja, "page.nothing"), "page.nothing");

        let bundle = translator.bundle(Locale::Ja);
        assert_eq!(bundle["page"]["title"], "タイトル");
        assert_eq!(bundle["page"]["only_en"], "English only");
        assert_eq!(translator.bundle(Locale::En)["page"]["title"], "Title");
    }

    #[test]
    fn placeholders_are_replaced() {
        let text = small().translate(Locale::En, "page.hello", &[("name", "Aki")]);
        assert_eq!(text, "Hi Aki, Aki!");
    }

    #[test]
    fn bundle_overlays_locale_on_default() {
        let bundle = small().bundle(Locale::Ja);
        assert_eq!(bundle["page"]["title"], "タイトル");
        assert_eq!(bundle["page"]["only_en"], "English only");
    }

    #[test]
    fn localized_keeps_key_and_text() {
        let message = Localized::new(Locale::En, "errors.notFound", &[]);
        assert_eq!(message.key, "errors.notFound");
        assert_eq!(message.to_string(), "The requested item was not found.");
    }

    #[test]
    fn embedded_dictionaries_load() {
        let translator = Translator::new(Locale::En).unwrap();
        assert_eq!(
            translator.t(Locale::Ja, "reportsPage.title"),
            "レポート"
        );
        assert_eq!(
            translator.t(Locale::Ja, "reportsPage.description"),
            "Download the reports generated by Alyka."
        );
        assert_eq!(
            translator.translate(
                Locale::En,
                "forecastPage.forecastTitle",
                &[("skuName", "Scarf")]
            ),
            "Sales & Stock Forecast for Scarf"
        );
    }
}
