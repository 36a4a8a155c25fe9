//! Handlers for the `/buildings` resource and its nested assignments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use khayr_core::error::CoreError;
use khayr_core::types::DbId;
use khayr_core::validation::validate_coordinates;
use khayr_db::models::assignment::{AssignmentWithVolunteer, BuildingAssignment, CreateAssignment};
use khayr_db::models::building::{Building, CreateBuilding, UpdateBuilding};
use khayr_db::repositories::{AssignmentRepo, BuildingRepo, VolunteerRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/buildings
pub async fn list_buildings(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Building>>>> {
    let data = BuildingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/buildings
///
/// Created from the map confirmation dialog. Coordinates are validated here
/// and frozen afterwards.
pub async fn create_building(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(input): Json<CreateBuilding>,
) -> AppResult<(StatusCode, Json<DataResponse<Building>>)> {
    validate_coordinates(input.latitude, input.longitude)?;
    let data = BuildingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/buildings/{id}
pub async fn get_building(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Building>>> {
    let data = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Building",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/buildings/{id}
///
/// The request body has no coordinate fields; extra JSON keys are ignored by
/// deserialization, so a client sending coordinates cannot move a building.
pub async fn update_building(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBuilding>,
) -> AppResult<Json<DataResponse<Building>>> {
    let data = BuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Building",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/buildings/{id}
///
/// The building's assignments cascade at the database level.
pub async fn delete_building(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BuildingRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Nested assignments
// ---------------------------------------------------------------------------

/// GET /api/v1/buildings/{id}/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(building_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AssignmentWithVolunteer>>>> {
    let exists = BuildingRepo::find_by_id(&state.pool, building_id)
        .await?
        .is_some();
    if !exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: building_id,
        }));
    }
    let data = AssignmentRepo::list_for_building(&state.pool, building_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/buildings/{id}/assignments
///
/// The same volunteer may be assigned to the same building more than once,
/// covering different apartments.
pub async fn create_assignment(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(building_id): Path<DbId>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<DataResponse<BuildingAssignment>>)> {
    let building_exists = BuildingRepo::find_by_id(&state.pool, building_id)
        .await?
        .is_some();
    if !building_exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: building_id,
        }));
    }

    let volunteer_exists = VolunteerRepo::find_by_id(&state.pool, input.volunteer_id)
        .await?
        .is_some();
    if !volunteer_exists {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id: input.volunteer_id,
        }));
    }

    let data = AssignmentRepo::create(&state.pool, building_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
