#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use plants_api::{AppState, PlantStore};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build the full application router over the given pool, mirroring the
/// construction in `main.rs` so tests exercise the same middleware stack.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        store: PlantStore::new(pool),
    };
    plants_api::app(state)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A valid creation payload for a fern.
pub fn fern() -> Value {
    serde_json::json!({
        "name": "Fern",
        "image": "fern.jpg",
        "price": 12.5
    })
}
