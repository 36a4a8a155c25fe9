//! HTTP-level integration tests for categories and image uploads.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;
use tower::ServiceExt;

/// 1x1 transparent PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const BOUNDARY: &str = "------------------------khayrtest";

/// Send a multipart POST with one part per (filename, content_type, bytes).
async fn post_multipart(
    app: Router,
    uri: &str,
    token: &str,
    files: &[(&str, &str, &[u8])],
) -> axum::http::Response<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (filename, content_type, bytes) in files {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request");
    app.oneshot(request).await.expect("request should complete")
}

/// Create a category via the API and return its id.
async fn create_category(pool: &PgPool, token: &str, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name, "description": "test category" });
    let response = post_json_auth(app, "/api/v1/categories", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("created id")
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    let id = create_category(&pool, &token, "Food parcels").await;

    // List contains the new category.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/categories", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Food parcels");

    // Partial update: only the description changes.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "description": "updated" });
    let response = put_json_auth(app, &format!("/api/v1/categories/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Food parcels");
    assert_eq!(json["data"]["description"], "updated");

    // Delete, then 404 on fetch.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/categories/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A blank category name is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_name_required(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "   " });
    let response = post_json_auth(app, "/api/v1/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Image uploads
// ---------------------------------------------------------------------------

/// A mixed batch uploads the valid image and reports the invalid file,
/// without failing the batch.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_batch_continues_past_bad_file(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let category_id = create_category(&pool, &token, "Gallery").await;

    let (app, store) = common::build_test_app_with_store(pool.clone());
    let response = post_multipart(
        app,
        &format!("/api/v1/categories/{category_id}/images"),
        &token,
        &[
            ("photo.png", "image/png", TINY_PNG),
            ("notes.txt", "text/plain", b"not an image"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let uploaded = json["data"]["uploaded"].as_array().unwrap();
    let failed = json["data"]["failed"].as_array().unwrap();
    assert_eq!(uploaded.len(), 1);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["filename"], "notes.txt");

    // The stored object exists and the row carries its public URL and
    // decoded dimensions.
    let key = uploaded[0]["file_path"].as_str().unwrap();
    assert!(key.starts_with(&format!("{category_id}/")));
    assert!(store.exists(key).await.unwrap());
    assert_eq!(
        uploaded[0]["image_url"].as_str().unwrap(),
        format!("/media/{key}")
    );
    assert_eq!(uploaded[0]["width"], 1);
    assert_eq!(uploaded[0]["height"], 1);
}

/// An upload with no file parts at all is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_requires_files(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let category_id = create_category(&pool, &token, "Empty").await;

    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        &format!("/api/v1/categories/{category_id}/images"),
        &token,
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Uploading to a nonexistent category is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_to_missing_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;

    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/v1/categories/9999/images",
        &token,
        &[("photo.png", "image/png", TINY_PNG)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting an image removes both the row and the stored object.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_image(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let category_id = create_category(&pool, &token, "DeleteMe").await;

    // One app instance throughout so every request shares the same store.
    let (app, store) = common::build_test_app_with_store(pool.clone());
    let response = post_multipart(
        app.clone(),
        &format!("/api/v1/categories/{category_id}/images"),
        &token,
        &[("photo.png", "image/png", TINY_PNG)],
    )
    .await;
    let json = body_json(response).await;
    let image_id = json["data"]["uploaded"][0]["id"].as_i64().unwrap();
    let key = json["data"]["uploaded"][0]["file_path"]
        .as_str()
        .unwrap()
        .to_string();

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/categories/{category_id}/images/{image_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!store.exists(&key).await.unwrap());

    let response = get_auth(
        app,
        &format!("/api/v1/categories/{category_id}/images"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

/// Category deletion proceeds even when a stored object is already gone:
/// remaining objects are removed, rows cascade, and the response is 204.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_delete_is_best_effort(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app).await;
    let category_id = create_category(&pool, &token, "Doomed").await;

    // One app instance throughout so every request shares the same store.
    let (app, store) = common::build_test_app_with_store(pool.clone());
    let response = post_multipart(
        app.clone(),
        &format!("/api/v1/categories/{category_id}/images"),
        &token,
        &[
            ("a.png", "image/png", TINY_PNG),
            ("b.png", "image/png", TINY_PNG),
        ],
    )
    .await;
    let json = body_json(response).await;
    let uploaded = json["data"]["uploaded"].as_array().unwrap();
    assert_eq!(uploaded.len(), 2);
    let key_a = uploaded[0]["file_path"].as_str().unwrap().to_string();
    let key_b = uploaded[1]["file_path"].as_str().unwrap().to_string();

    // Simulate out-of-band cleanup of one object.
    store.remove(&key_a).await.unwrap();

    let response = delete_auth(app, &format!("/api/v1/categories/{category_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The surviving object was removed and the image rows cascaded.
    assert!(!store.exists(&key_b).await.unwrap());
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
