#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

/// Build a test `ServerConfig` from the built-in defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).expect("default config is valid")
}

/// Create the catalog schema in `pool` and build the full application
/// router (same middleware stack as production) on top of it.
pub async fn build_test_app(pool: SqlitePool) -> Router {
    marquee_db::init_schema(&pool).await.unwrap();
    build_app_router(AppState { pool }, &test_config())
}

/// Build the router over a pool from `marquee_db::connect_with`, the path
/// the binary takes. `#[sqlx::test]` pools keep foreign keys switched on.
pub async fn build_app_with_connect_options(options: SqliteConnectOptions) -> Router {
    let pool = marquee_db::connect_with(options, 1).await.unwrap();
    build_test_app(pool).await
}

/// Build the router without creating the catalog schema.
pub fn build_app_without_schema(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a director through the API and return the id it was given.
///
/// The create endpoint answers with an empty body, so the id is read back
/// from the list.
pub async fn create_director(app: &Router, name: &str) -> i64 {
    create_named(app, "/directors/", name).await
}

/// Create a genre through the API and return the id it was given.
pub async fn create_genre(app: &Router, name: &str) -> i64 {
    create_named(app, "/genres/", name).await
}

async fn create_named(app: &Router, collection: &str, name: &str) -> i64 {
    let response = post_json(app.clone(), collection, serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let list = body_json(get(app.clone(), collection).await).await;
    list.as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|item| item["name"] == name)
        .and_then(|item| item["id"].as_i64())
        .unwrap()
}

pub fn movie_payload(title: &str, director_id: Option<i64>, genre_id: Option<i64>) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": format!("{title} description"),
        "trailer": format!("https://example.com/{}", title.to_lowercase()),
        "year": 1960,
        "rating": 7.9,
        "director_id": director_id,
        "genre_id": genre_id,
    })
}
