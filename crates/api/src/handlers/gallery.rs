//! Public gallery feed. No authentication: this backs the public site.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use khayr_core::media::filter_by_category;
use khayr_db::models::category_image::GalleryItem;
use khayr_db::repositories::CategoryImageRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /gallery`.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    /// Category label to filter by. Absent or the all-sentinel shows
    /// everything.
    pub category: Option<String>,
}

/// GET /api/v1/gallery?category=…
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryQuery>,
) -> AppResult<Json<DataResponse<Vec<GalleryItem>>>> {
    let items = CategoryImageRepo::list_gallery(&state.pool).await?;
    let data = filter_by_category(items, params.category.as_deref(), |item| {
        &item.category_name
    });
    Ok(Json(DataResponse { data }))
}
