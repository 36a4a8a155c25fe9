//! Route definitions, one module per resource.
//!
//! Assembled route tree (all under `/api/v1` except `/health`). Everything
//! below the auth block is admin-only except `/gallery`, which is the
//! public site's feed:
//!
//! ```text
//! GET    /health                      (public)
//!
//! POST   /auth/login                  (public)
//! POST   /auth/refresh                (public)
//! POST   /auth/logout                 (any signed-in identity)
//! GET    /auth/me                     (any signed-in identity)
//!
//! GET    /users
//! POST   /users
//! GET    /users/{id}
//! PUT    /users/{id}
//! DELETE /users/{id}
//! POST   /users/{id}/reset-password
//!
//! GET    /categories
//! POST   /categories
//! GET    /categories/{id}
//! PUT    /categories/{id}
//! DELETE /categories/{id}
//! GET    /categories/{id}/images
//! POST   /categories/{id}/images
//! DELETE /categories/{id}/images/{image_id}
//!
//! GET    /volunteers
//! POST   /volunteers
//! GET    /volunteers/{id}
//! PUT    /volunteers/{id}
//! DELETE /volunteers/{id}
//!
//! GET    /buildings
//! POST   /buildings
//! GET    /buildings/{id}
//! PUT    /buildings/{id}
//! DELETE /buildings/{id}
//! GET    /buildings/{id}/assignments
//! POST   /buildings/{id}/assignments
//! DELETE /assignments/{id}
//!
//! GET    /geocode/search
//! GET    /geocode/reverse
//!
//! GET    /dashboard/summary
//! GET    /gallery                     (public)
//! ```

use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod buildings;
pub mod categories;
pub mod dashboard;
pub mod gallery;
pub mod geocode;
pub mod health;
pub mod users;
pub mod volunteers;

/// All `/api/v1` routes merged into one router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .merge(users::routes())
        .merge(categories::routes())
        .merge(volunteers::routes())
        .merge(buildings::routes())
        .merge(geocode::routes())
        .merge(dashboard::routes())
        .merge(gallery::routes())
}
