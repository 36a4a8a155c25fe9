//! Shared test harness: router construction and HTTP request helpers.
//!
//! Mirrors the router construction in `main.rs` so integration tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use khayr_api::auth::password::hash_password;
use khayr_api::config::{JwtConfig, ServerConfig};
use khayr_api::router::build_app_router;
use khayr_api::state::AppState;
use khayr_db::models::user::CreateUser;
use khayr_db::repositories::UserRepo;
use khayr_geo::GeocodingClient;
use khayr_storage::ObjectStore;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config(media_root: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root: media_root.display().to_string(),
        media_public_base: "/media".to_string(),
        public_dir: "public".to_string(),
        geocoder_base_url: "http://127.0.0.1:9".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_ttl_mins: 15,
            refresh_ttl_days: 7,
        },
    }
}

/// Build the full application router backed by a per-test media directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let (app, _store) = build_test_app_with_store(pool);
    app
}

/// Like [`build_test_app`], also returning the object store so tests can
/// inspect stored objects directly.
pub fn build_test_app_with_store(pool: PgPool) -> (Router, Arc<ObjectStore>) {
    // Kept on disk for the duration of the test run; the OS temp cleaner
    // reclaims it.
    let media_root = tempfile::tempdir().expect("tempdir").keep();
    let config = test_config(&media_root);

    let store = Arc::new(ObjectStore::new(&config.media_root, "/media"));
    let geocoder = Arc::new(GeocodingClient::new(&config.geocoder_base_url));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::clone(&store),
        geocoder,
    };

    (build_app_router(state, &config), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the row plus the
/// plaintext password. Role id 1 is admin, 2 is operator (seeded by the
/// initial migration).
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    role_id: i64,
) -> (khayr_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        email: email.to_string(),
        display_name: None,
        password_hash: hashed,
        role_id,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the access token.
pub async fn login_token(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string()
}

/// Create an admin user and log in, returning the access token.
pub async fn admin_token(pool: &PgPool, app: Router) -> String {
    let (_user, password) = create_test_user(pool, "admin@test.com", 1).await;
    login_token(app, "admin@test.com", &password).await
}
