// Authentication handlers
pub mod auth;

// User settings handlers
pub mod settings;
