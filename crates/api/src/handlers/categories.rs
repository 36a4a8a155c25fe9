//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use khayr_core::error::CoreError;
use khayr_core::types::DbId;
use khayr_core::validation::validate_required_name;
use khayr_db::models::category::{Category, CreateCategory, UpdateCategory};
use khayr_db::repositories::{CategoryImageRepo, CategoryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let data = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_required_name(&input.name, "Category")?;
    let data = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let data = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Category",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(name) = &input.name {
        validate_required_name(name, "Category")?;
    }
    let data = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Category",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/categories/{id}
///
/// Removes the category's stored objects best-effort before deleting the
/// row. An object that fails to delete is logged and skipped; the category
/// row is deleted regardless, and its image rows cascade. A later sweep can
/// reclaim orphaned objects.
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let exists = CategoryRepo::find_by_id(&state.pool, id).await?.is_some();
    if !exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    let images = CategoryImageRepo::list_for_category(&state.pool, id).await?;
    for image in &images {
        if let Err(e) = state.store.remove(&image.file_path).await {
            tracing::warn!(
                category_id = id,
                image_id = image.id,
                key = %image.file_path,
                error = %e,
                "Failed to remove stored object; continuing"
            );
        }
    }

    CategoryRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
