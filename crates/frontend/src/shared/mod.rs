pub mod api;
pub mod api_utils;
pub mod charts;
pub mod download;
pub mod i18n;
pub mod number_format;
pub mod toast;
