use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{assignments, buildings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/buildings",
            get(buildings::list_buildings).post(buildings::create_building),
        )
        .route(
            "/buildings/{id}",
            get(buildings::get_building)
                .put(buildings::update_building)
                .delete(buildings::delete_building),
        )
        .route(
            "/buildings/{id}/assignments",
            get(buildings::list_assignments).post(buildings::create_assignment),
        )
        .route("/assignments/{id}", delete(assignments::delete_assignment))
}
