//! Admin dashboard overview.

use axum::extract::State;
use axum::Json;

use khayr_db::repositories::stats_repo::EntityCounts;
use khayr_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
///
/// Entity counts for the dashboard cards.
pub async fn summary(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<DataResponse<EntityCounts>>> {
    let data = StatsRepo::entity_counts(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}
