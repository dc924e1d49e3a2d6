pub mod api;
pub mod auth;
pub mod handlers;
pub mod initialization;
pub mod middleware;
pub mod settings;
pub mod tracing;
pub mod users;
