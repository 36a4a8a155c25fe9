//! HTTP-level integration tests for buildings and volunteer assignments.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_building(pool: &PgPool, token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "building_number": "12",
        "street_name": "Main St",
        "latitude": 31.5,
        "longitude": 34.47,
        "location_details": "12, Main St, Somewhere"
    });
    let response = post_json_auth(app, "/api/v1/buildings", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("created id")
}

async fn create_volunteer(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name, "working_area": "Rimal" });
    let response = post_json_auth(app, "/api/v1/volunteers", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("created id")
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_building_create_and_fetch(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    let id = create_building(&pool, &token).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/buildings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["latitude"], 31.5);
    assert_eq!(json["data"]["longitude"], 34.47);
    assert_eq!(json["data"]["custom_data"], serde_json::json!({}));
}

/// Out-of-range coordinates are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_building_rejects_bad_coordinates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    for (lat, lng) in [(91.0, 0.0), (0.0, -181.0)] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "latitude": lat, "longitude": lng });
        let response = post_json_auth(app, "/api/v1/buildings", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "({lat}, {lng})");
    }
}

/// Updates can change descriptive fields but never move the building, even
/// when the client sends coordinate fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_building_coordinates_immutable(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let id = create_building(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "street_name": "Renamed St",
        "latitude": 0.0,
        "longitude": 0.0
    });
    let response = put_json_auth(app, &format!("/api/v1/buildings/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["street_name"], "Renamed St");
    assert_eq!(json["data"]["latitude"], 31.5);
    assert_eq!(json["data"]["longitude"], 34.47);
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_assignment_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let building_id = create_building(&pool, &token).await;
    let volunteer_id = create_volunteer(&pool, &token, "Ahmad").await;

    // Assign with apartment details.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "volunteer_id": volunteer_id,
        "apartment_number": "3A",
        "donor_number": "D-17",
        "notes": "second floor"
    });
    let response = post_json_auth(
        app,
        &format!("/api/v1/buildings/{building_id}/assignments"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let assignment_id = json["data"]["id"].as_i64().unwrap();

    // The listing joins in the volunteer's name and working area.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/buildings/{building_id}/assignments"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["volunteer_name"], "Ahmad");
    assert_eq!(json["data"][0]["volunteer_working_area"], "Rimal");
    assert_eq!(json["data"][0]["apartment_number"], "3A");

    // Remove the assignment.
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/assignments/{assignment_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// The same volunteer may be assigned to the same building twice (different
/// apartments).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_pair_allowed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let building_id = create_building(&pool, &token).await;
    let volunteer_id = create_volunteer(&pool, &token, "Samira").await;

    for apartment in ["1A", "2B"] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({
            "volunteer_id": volunteer_id,
            "apartment_number": apartment
        });
        let response = post_json_auth(
            app,
            &format!("/api/v1/buildings/{building_id}/assignments"),
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/buildings/{building_id}/assignments"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// Assigning a nonexistent volunteer is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_assignment_requires_existing_volunteer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let building_id = create_building(&pool, &token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "volunteer_id": 9999 });
    let response = post_json_auth(
        app,
        &format!("/api/v1/buildings/{building_id}/assignments"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a building takes its assignments with it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_building_delete_cascades_assignments(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let building_id = create_building(&pool, &token).await;
    let volunteer_id = create_volunteer(&pool, &token, "Omar").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "volunteer_id": volunteer_id });
    let response = post_json_auth(
        app,
        &format!("/api/v1/buildings/{building_id}/assignments"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/buildings/{building_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM building_assignments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
