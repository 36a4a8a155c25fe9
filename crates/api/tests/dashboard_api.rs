//! Dashboard summary tests.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth, post_json_auth};
use sqlx::PgPool;

/// The summary counts each entity, starting at zero on a fresh database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_counts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/dashboard/summary", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["categories"], 0);
    assert_eq!(json["data"]["volunteers"], 0);
    assert_eq!(json["data"]["buildings"], 0);
    assert_eq!(json["data"]["images"], 0);

    // Create one category and one volunteer, then the counts move.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Food parcels" });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "Ahmad" });
    let response = post_json_auth(app, "/api/v1/volunteers", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/dashboard/summary", &token).await).await;
    assert_eq!(json["data"]["categories"], 1);
    assert_eq!(json["data"]["volunteers"], 1);
    assert_eq!(json["data"]["buildings"], 0);
}

/// The summary is part of the admin area and requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_summary_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
