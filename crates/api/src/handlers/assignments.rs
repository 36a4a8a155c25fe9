//! Handler for deleting a building assignment by its own id.
//!
//! Creation and listing are nested under `/buildings/{id}/assignments`; only
//! deletion addresses the assignment directly.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use khayr_core::error::CoreError;
use khayr_core::types::DbId;
use khayr_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// DELETE /api/v1/assignments/{id}
pub async fn delete_assignment(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AssignmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
