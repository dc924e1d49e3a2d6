use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::system;

/// Роуты страниц приложения. Все, кроме словарей, требуют входа.
fn configure_app_routes() -> Router {
    Router::new()
        // ========================================
        // FORECAST (u601, u602, u606)
        // ========================================
        .route("/api/forecast/skus", get(handlers::forecast::list_skus))
        .route("/api/forecast", post(handlers::forecast::forecast))
        .route(
            "/api/forecast/market",
            post(handlers::market_forecast::forecast_market),
        )
        .route("/api/assistant", post(handlers::assistant::command))
        // ========================================
        // TRENDS (u603, u604, d600)
        // ========================================
        .route("/api/trend-report", post(handlers::trend_report::generate))
        .route("/api/trend-image", post(handlers::trend_image::generate))
        .route("/api/analytics/trends", get(handlers::analytics::trends))
        // ========================================
        // REPORTS (u605, a601)
        // ========================================
        .route("/api/reports", get(handlers::reports::list))
        .route("/api/reports/sales", post(handlers::sales_report::generate))
        .route(
            "/api/reports/:id",
            get(handlers::reports::get_by_id).delete(handlers::reports::delete),
        )
        .route("/api/reports/:id/download", get(handlers::reports::download))
        // ========================================
        // TASKS (a602), FEEDBACK (a603), POS SALES (d601)
        // ========================================
        .route("/api/tasks", get(handlers::tasks::list))
        .route("/api/tasks/:id", get(handlers::tasks::get_by_id))
        .route("/api/tasks/:id/status", post(handlers::tasks::update_status))
        .route("/api/feedback", post(handlers::feedback::submit))
        .route("/api/pos-sales", get(handlers::pos_sales::overview))
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth))
}

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .merge(system::api::routes::configure_system_routes())
        .merge(configure_app_routes())
        // Словари интерфейса (публичные, нужны до входа)
        .route("/api/i18n/:locale", get(handlers::i18n::bundle))
        .route("/api/i18n/:locale/t", get(handlers::i18n::translate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{AuthConfig, DemoUserConfig};
    use crate::shared::data::db::install_test_connection;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn login_request(email: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/system/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "email": email, "password": password }).to_string(),
            ))
            .unwrap()
    }

    fn tasks_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/tasks");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    // Один тест на весь процесс: соединение глобальное
    #[tokio::test]
    async fn login_flow_and_protected_routes() {
        let conn = install_test_connection().await;
        let auth = AuthConfig {
            jwt_secret: Some("router-test-secret".into()),
            access_token_hours: 1,
            refresh_token_days: 1,
        };
        system::auth::jwt::initialize(conn, &auth).await.unwrap();
        let demo = DemoUserConfig {
            enabled: true,
            username: "test".into(),
            email: "test@alyka.io".into(),
            password: "test12345".into(),
        };
        system::initialization::seed_data(conn, &demo).await.unwrap();

        let app = configure_routes();

        // Демо-вход ведёт на аналитику
        let response = app
            .clone()
            .oneshot(login_request("test@alyka.io", "test12345"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["redirect_to"], "/analytics");
        let token = body["access_token"].as_str().unwrap().to_string();
        assert!(!token.is_empty());

        // Неверный пароль
        let response = app
            .clone()
            .oneshot(login_request("test@alyka.io", "wrong-password"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "loginPage.loginErrorDescription");
        assert!(body["message"].is_string());

        // Без токена
        let response = app.clone().oneshot(tasks_request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "errors.unauthorized");
        assert!(body["message"].is_string());

        // Мусорный токен
        let response = app
            .clone()
            .oneshot(tasks_request(Some("not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // С токеном
        let response = app
            .clone()
            .oneshot(tasks_request(Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(!body.as_array().unwrap().is_empty());

        // Битое тело отчёта о продажах
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/reports/sales")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"store\": "))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "errors.invalidRequest");

        // Словари доступны без входа
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/i18n/en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
