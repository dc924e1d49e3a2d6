use contracts::shared::i18n::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub demo_user: DemoUserConfig,
    pub llm: LlmConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда, отдаётся как fallback
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// If empty, a secret is generated once and kept in sys_settings
    #[serde(default)]
    pub jwt_secret: Option<String>,
    pub access_token_hours: i64,
    pub refresh_token_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoUserConfig {
    pub enabled: bool,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub image_model: String,
    pub temperature: f64,
    pub max_tokens: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct I18nConfig {
    pub default_locale: Locale,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[database]
path = "target/db/alyka.db"

[auth]
access_token_hours = 24
refresh_token_days = 30

[demo_user]
enabled = true
username = "test"
email = "test@alyka.io"
password = "test12345"

[llm]
api_base = "https://api.openai.com/v1"
model = "gpt-4o-mini"
image_model = "dall-e-3"
temperature = 0.7
max_tokens = 2048

[i18n]
default_locale = "en"
"#;

/// Env variables checked (in order) for the LLM API key
const API_KEY_ENV_VARS: [&str; 2] = ["ALYKA_LLM_API_KEY", "OPENAI_API_KEY"];

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The LLM API key from the environment wins over the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_config_file()?;
    if let Some(key) = api_key_from_env() {
        config.llm.api_key = key;
    }
    Ok(config)
}

fn load_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Parse a config document; sections missing from it keep their defaults
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(contents)?;
    merge_tables(&mut merged, overrides);
    let config: Config = toml::Value::Table(merged).try_into()?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_section)), toml::Value::Table(section)) => {
                merge_tables(base_section, section)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/alyka.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.demo_user.email, "test@alyka.io");
        assert_eq!(config.i18n.default_locale, Locale::En);
        assert!(config.auth.jwt_secret.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            [server]
            port = 8080

            [llm]
            model = "gpt-4.1-mini"

            [i18n]
            default_locale = "ja"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, "gpt-4.1-mini");
        assert_eq!(config.llm.image_model, "dall-e-3");
        assert_eq!(config.i18n.default_locale, Locale::Ja);
    }

    #[test]
    fn invalid_locale_is_rejected() {
        assert!(parse_config("[i18n]\ndefault_locale = \"fr\"\n").is_err());
    }
}
