use axum::routing::get;
use axum::Router;

use crate::handlers::geocode;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/geocode/search", get(geocode::search))
        .route("/geocode/reverse", get(geocode::reverse))
}
