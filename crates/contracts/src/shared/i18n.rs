use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Язык интерфейса и генерируемого контента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Название языка на английском, для подстановки в промпты
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "Japanese",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-параметр `?lang=` для локализуемых эндпоинтов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleParams {
    pub lang: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_locales() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" JA ".parse::<Locale>(), Ok(Locale::Ja));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
