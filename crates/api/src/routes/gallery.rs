use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/gallery", get(gallery::list_gallery))
}
