use axum::routing::get;
use axum::Router;

use crate::handlers::volunteers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/volunteers",
            get(volunteers::list_volunteers).post(volunteers::create_volunteer),
        )
        .route(
            "/volunteers/{id}",
            get(volunteers::get_volunteer)
                .put(volunteers::update_volunteer)
                .delete(volunteers::delete_volunteer),
        )
}
