use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod guests;
mod health;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Guest routes
        .route("/api/guests", post(guests::create_guest))
        .route("/api/guests/by-host/:hostName", get(guests::list_by_host))
        .route("/api/guests/by-date/:date", get(guests::list_by_date))
        .route("/api/guests/:guestId", delete(guests::delete_guest))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = Database::in_memory().await.unwrap();
        db.run_migrations().await.unwrap();
        create_router(AppState::new(db))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn alice_guest() -> Value {
        json!({
            "line_user_id": "u1",
            "host_name": "Alice",
            "first_name": "Bob",
            "last_name": "Lee",
            "date": "2024-06-01",
            "arrival_time": "14:00"
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_register_list_delete_flow() {
        let app = app().await;

        let (status, created) = send(&app, Method::POST, "/api/guests", Some(alice_guest())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["host_name"], "Alice");
        assert_eq!(created["visit_date"], "2024-06-01");
        assert!(created["created_at"].is_string());

        let (status, listed) = send(&app, Method::GET, "/api/guests/by-host/Alice", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            listed,
            json!([{
                "id": 1,
                "first_name": "Bob",
                "last_name": "Lee",
                "phone": null,
                "date": "2024-06-01",
                "arrival_time": "14:00"
            }])
        );

        let (status, body) = send(&app, Method::DELETE, "/api/guests/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Guest deleted successfully"}));

        let (status, body) = send(&app, Method::DELETE, "/api/guests/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Guest not found."}));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let app = app().await;
        let mut guest = alice_guest();
        guest.as_object_mut().unwrap().remove("host_name");

        let (status, body) = send(&app, Method::POST, "/api/guests", Some(guest)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("host_name"));

        let (_, listed) = send(&app, Method::GET, "/api/guests/by-date/2024-06-01", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_shape() {
        let app = app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/guests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_by_date_projection() {
        let app = app().await;
        send(&app, Method::POST, "/api/guests", Some(alice_guest())).await;

        let (status, listed) = send(&app, Method::GET, "/api/guests/by-date/2024-06-01", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            listed,
            json!([{
                "host_name": "Alice",
                "first_name": "Bob",
                "last_name": "Lee",
                "phone": null,
                "arrival_time": "14:00"
            }])
        );
    }

    #[tokio::test]
    async fn test_unknown_host_is_empty_list() {
        let app = app().await;
        let (status, listed) =
            send(&app, Method::GET, "/api/guests/by-host/nonexistent-host", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_percent_encoded_host_name() {
        let app = app().await;
        let mut guest = alice_guest();
        guest["host_name"] = json!("Alice Smith");
        send(&app, Method::POST, "/api/guests", Some(guest)).await;

        let (_, listed) = send(&app, Method::GET, "/api/guests/by-host/Alice%20Smith", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id() {
        let app = app().await;
        let (status, body) = send(&app, Method::DELETE, "/api/guests/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
