use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{categories, category_images};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/{id}/images",
            get(category_images::list_images).post(category_images::upload_images),
        )
        .route(
            "/categories/{id}/images/{image_id}",
            delete(category_images::delete_image),
        )
}
