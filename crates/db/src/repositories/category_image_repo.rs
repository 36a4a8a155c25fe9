//! Repository for the `category_images` table.

use sqlx::PgPool;

use khayr_core::types::DbId;

use crate::models::category_image::{CategoryImage, CreateCategoryImage, GalleryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, image_url, file_path, width, height, created_at";

/// Provides CRUD operations for category images.
pub struct CategoryImageRepo;

impl CategoryImageRepo {
    /// Record an uploaded image, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategoryImage,
    ) -> Result<CategoryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO category_images (category_id, image_url, file_path, width, height)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryImage>(&query)
            .bind(input.category_id)
            .bind(&input.image_url)
            .bind(&input.file_path)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_images WHERE id = $1");
        sqlx::query_as::<_, CategoryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all images of one category, newest first.
    pub async fn list_for_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<CategoryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM category_images
             WHERE category_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, CategoryImage>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List the full gallery feed: every image joined with its category
    /// name, newest first. Category filtering happens in memory afterwards.
    pub async fn list_gallery(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        sqlx::query_as::<_, GalleryItem>(
            "SELECT ci.id, ci.image_url, ci.category_id, c.name AS category_name, ci.created_at
             FROM category_images ci
             JOIN categories c ON c.id = ci.category_id
             ORDER BY ci.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete an image row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
