//! Handlers for category image uploads and listing.
//!
//! Uploads arrive as multipart form data, one part per file. Each file is
//! processed independently: a file that fails (wrong content type, storage
//! or database error) is reported in the response and does not abort the
//! rest of the batch.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use khayr_core::error::CoreError;
use khayr_core::objects::object_key;
use khayr_core::types::DbId;
use khayr_db::models::category_image::{CategoryImage, CreateCategoryImage};
use khayr_db::repositories::{CategoryImageRepo, CategoryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// One file that could not be uploaded.
#[derive(Debug, Serialize)]
pub struct UploadFailure {
    pub filename: String,
    pub reason: String,
}

/// Result of a batch upload: the rows created plus per-file failures.
#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub uploaded: Vec<CategoryImage>,
    pub failed: Vec<UploadFailure>,
}

/// GET /api/v1/categories/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(category_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CategoryImage>>>> {
    let exists = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_some();
    if !exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }
    let data = CategoryImageRepo::list_for_category(&state.pool, category_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/categories/{id}/images
///
/// Multipart batch upload. Returns 201 with the created rows and any
/// per-file failures, or 400 when the request contains no files at all.
pub async fn upload_images(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(category_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadOutcome>>)> {
    let exists = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_some();
    if !exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }

    let mut uploaded = Vec::new();
    let mut failed = Vec::new();
    let mut saw_file = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            // Non-file parts (plain form fields) are ignored.
            None => continue,
        };
        saw_file = true;

        let is_image = field
            .content_type()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            failed.push(UploadFailure {
                filename,
                reason: "Not an image (content type must be image/*)".into(),
            });
            continue;
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                failed.push(UploadFailure {
                    filename,
                    reason: format!("Failed to read file data: {e}"),
                });
                continue;
            }
        };

        match store_one(&state, category_id, &filename, &bytes).await {
            Ok(image) => uploaded.push(image),
            Err(e) => {
                tracing::warn!(
                    category_id,
                    filename = %filename,
                    error = %e,
                    "Image upload failed; continuing with remaining files"
                );
                failed.push(UploadFailure {
                    filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    if !saw_file {
        return Err(AppError::BadRequest(
            "No files were provided in the upload".into(),
        ));
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadOutcome { uploaded, failed },
        }),
    ))
}

/// DELETE /api/v1/categories/{category_id}/images/{image_id}
///
/// Removes the stored object best-effort, then the row.
pub async fn delete_image(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path((category_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let image = CategoryImageRepo::find_by_id(&state.pool, image_id)
        .await?
        .filter(|img| img.category_id == category_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "Image",
            id: image_id,
        })?;

    if let Err(e) = state.store.remove(&image.file_path).await {
        tracing::warn!(
            image_id,
            key = %image.file_path,
            error = %e,
            "Failed to remove stored object; deleting row anyway"
        );
    }

    CategoryImageRepo::delete(&state.pool, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Store one file and record its row.
async fn store_one(
    state: &AppState,
    category_id: DbId,
    filename: &str,
    bytes: &[u8],
) -> AppResult<CategoryImage> {
    let key = object_key(category_id, chrono::Utc::now().timestamp_millis(), filename);
    let image_url = state.store.put(&key, bytes).await?;

    // Dimensions are a nice-to-have for gallery layout; a file the decoder
    // cannot read the header of still uploads fine.
    let (width, height) = match image_dimensions(bytes) {
        Some((w, h)) => (Some(w as i32), Some(h as i32)),
        None => (None, None),
    };

    let image = CategoryImageRepo::create(
        &state.pool,
        &CreateCategoryImage {
            category_id,
            image_url,
            file_path: key,
            width,
            height,
        },
    )
    .await?;

    Ok(image)
}

/// Read image dimensions from the encoded header without a full decode.
fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
