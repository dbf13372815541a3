pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::requests::handlers as requests;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public read API
        .route("/api/public/states", get(directory::handle_states))
        .route("/api/public/cities", get(directory::handle_cities))
        .route("/api/public/hiring", get(directory::handle_hiring))
        .route(
            "/api/public/hiring/grouped",
            get(directory::handle_hiring_grouped),
        )
        .route(
            "/api/public/hiring/html",
            get(directory::handle_hiring_html),
        )
        // Application-request form relay
        .route("/request", post(requests::handle_submit_request))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::mailer::ResendClient;
    use crate::supabase::SupabaseClient;

    fn test_state() -> AppState {
        let config = Config {
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_service_role_key: "test-key".to_string(),
            resend_api_key: "test-key".to_string(),
            email_to: "ops@example.com".to_string(),
            email_from: "noreply@example.com".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        AppState {
            supabase: SupabaseClient::new(&config.supabase_url, config.supabase_service_role_key.clone()),
            mailer: ResendClient::new(config.resend_api_key.clone()),
            config,
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_states_returns_envelope_with_fifty_entries() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get("/api/public/states")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 50);
        assert_eq!(json["data"][0]["code"], "AL");
    }

    #[tokio::test]
    async fn test_cities_without_state_is_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get("/api/public/cities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_hiring_with_unknown_state_is_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get("/api/public/hiring?state=ZZ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_with_missing_fields_is_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::post("/request")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"first_name": "Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Please fill out all required fields."
        );
    }

    #[tokio::test]
    async fn test_request_with_bad_email_is_400() {
        let app = build_router(test_state());
        let payload = r#"{
            "first_name": "Ada", "last_name": "Lovelace", "email": "nope",
            "street": "1 Way", "city": "London", "state": "OH", "zip": "43140"
        }"#;
        let response = app
            .oneshot(
                Request::post("/request")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Please enter a valid email.");
    }
}
