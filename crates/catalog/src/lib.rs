//! Shopfront catalog server library.
//!
//! Serves the product catalog as JSON over HTTP. The catalog is read-only:
//! the item list is loaded once from a seed file and never mutated.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::Method;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::CatalogConfig;
pub use state::AppState;

/// Build the catalog router with request tracing and permissive CORS for reads.
pub fn app(state: AppState) -> Router {
    with_layers(routes::routes()).with_state(state)
}

/// Panic recovery, tracing and CORS around `router`.
fn with_layers(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use shopfront_core::{Item, ItemId};
    use tower::ServiceExt;

    use super::*;

    fn item(id: i32, title: &str) -> Item {
        Item {
            id: ItemId::new(id),
            title: title.to_string(),
            category: "Hats".to_string(),
            price: "19.99".parse().unwrap(),
            rating: 4.0,
            image_url: format!("{id}.jpg"),
            collection: "Winter".to_string(),
            color: "Red".to_string(),
            color1: "#aa0000".to_string(),
            color2: "#000000".to_string(),
            description: String::new(),
        }
    }

    fn test_app() -> Router {
        app(AppState::new(vec![item(1, "Wool Hat"), item(2, "Cap")]))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_items_in_seed_order() {
        let (status, body) = get("/items").await;
        assert_eq!(status, StatusCode::OK);

        let items: Vec<Item> = serde_json::from_value(body).unwrap();
        let ids: Vec<i32> = items.iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_price_is_a_string_on_the_wire() {
        let (_, body) = get("/items/1").await;
        assert_eq!(body["price"], "19.99");
        assert_eq!(body["img_url"], "1.jpg");
    }

    #[tokio::test]
    async fn test_get_item() {
        let (status, body) = get("/items/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Cap");
    }

    #[tokio::test]
    async fn test_missing_item_is_404() {
        let (status, body) = get("/items/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn test_panicking_handler_is_500() {
        async fn broken() -> &'static str {
            panic!("catalog index corrupted")
        }

        let router = with_layers(routes::routes().route("/broken", axum::routing::get(broken)))
            .with_state(AppState::new(Vec::new()));
        let response = router
            .oneshot(Request::get("/broken").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400() {
        let (status, body) = get("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
