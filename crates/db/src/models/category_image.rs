//! Category image model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use khayr_core::types::{DbId, Timestamp};

/// A category image row from the `category_images` table.
///
/// `file_path` is the object-store key; `image_url` the public address
/// clients load the image from.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryImage {
    pub id: DbId,
    pub category_id: DbId,
    pub image_url: String,
    pub file_path: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded image.
#[derive(Debug)]
pub struct CreateCategoryImage {
    pub category_id: DbId,
    pub image_url: String,
    pub file_path: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// A gallery feed item: an image joined with its category name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub image_url: String,
    pub category_id: DbId,
    pub category_name: String,
    pub created_at: Timestamp,
}
