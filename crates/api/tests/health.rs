//! Health endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// GET /health returns 200 with a status body when the database is up.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

/// Health responses carry the request id header set by the middleware.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_has_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert!(
        response.headers().contains_key("x-request-id"),
        "response must carry x-request-id"
    );
}
