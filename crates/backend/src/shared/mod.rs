pub mod config;
pub mod data;
pub mod format;
pub mod i18n;
pub mod llm;
