//! HTTP handlers, one module per resource.

pub mod assignments;
pub mod auth;
pub mod buildings;
pub mod categories;
pub mod category_images;
pub mod dashboard;
pub mod gallery;
pub mod geocode;
pub mod users;
pub mod volunteers;
