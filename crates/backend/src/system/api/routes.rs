use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::system::{auth, handlers};

/// Конфигурация системных роутов приложения
pub fn configure_system_routes() -> Router {
    Router::new()
        // ========================================
        // HEALTH CHECK
        // ========================================
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route("/api/system/auth/register", post(handlers::auth::register))
        .route("/api/system/auth/login", post(handlers::auth::login))
        .route("/api/system/auth/refresh", post(handlers::auth::refresh))
        .route("/api/system/auth/logout", post(handlers::auth::logout))
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(handlers::auth::current_user)
                .layer(middleware::from_fn(auth::middleware::require_auth)),
        )
        // ========================================
        // USER SETTINGS
        // ========================================
        .route(
            "/api/system/settings",
            get(handlers::settings::get_settings)
                .put(handlers::settings::save_settings)
                .layer(middleware::from_fn(auth::middleware::require_auth)),
        )
}
