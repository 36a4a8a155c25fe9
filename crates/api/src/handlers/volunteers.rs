//! Handlers for the `/volunteers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use khayr_core::error::CoreError;
use khayr_core::types::DbId;
use khayr_core::validation::validate_required_name;
use khayr_db::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use khayr_db::repositories::VolunteerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/volunteers
pub async fn list_volunteers(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Volunteer>>>> {
    let data = VolunteerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/volunteers
pub async fn create_volunteer(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateVolunteer>,
) -> AppResult<(StatusCode, Json<DataResponse<Volunteer>>)> {
    validate_required_name(&input.name, "Volunteer")?;
    let data = VolunteerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/volunteers/{id}
pub async fn get_volunteer(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Volunteer>>> {
    let data = VolunteerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Volunteer",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/volunteers/{id}
pub async fn update_volunteer(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVolunteer>,
) -> AppResult<Json<DataResponse<Volunteer>>> {
    if let Some(name) = &input.name {
        validate_required_name(name, "Volunteer")?;
    }
    let data = VolunteerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Volunteer",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/volunteers/{id}
///
/// The volunteer's building assignments cascade at the database level.
pub async fn delete_volunteer(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VolunteerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
