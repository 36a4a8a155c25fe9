//! Repository for the `buildings` table.

use sqlx::PgPool;

use khayr_core::types::DbId;

use crate::models::building::{Building, CreateBuilding, UpdateBuilding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, building_number, street_name, latitude, longitude, \
                        location_details, custom_data, created_at, updated_at";

/// Provides CRUD operations for buildings.
pub struct BuildingRepo;

impl BuildingRepo {
    /// Insert a new building, returning the created row.
    ///
    /// `custom_data` defaults to an empty object when absent.
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> Result<Building, sqlx::Error> {
        let custom_data = input
            .custom_data
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        let query = format!(
            "INSERT INTO buildings
                (building_number, street_name, latitude, longitude, location_details, custom_data)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(&input.building_number)
            .bind(&input.street_name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.location_details)
            .bind(custom_data)
            .fetch_one(pool)
            .await
    }

    /// Find a building by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all buildings, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings ORDER BY created_at DESC");
        sqlx::query_as::<_, Building>(&query).fetch_all(pool).await
    }

    /// Update a building's editable fields. Coordinates are set once at
    /// creation and deliberately not updatable here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "UPDATE buildings SET
                building_number = COALESCE($2, building_number),
                street_name = COALESCE($3, street_name),
                location_details = COALESCE($4, location_details),
                custom_data = COALESCE($5, custom_data)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(&input.building_number)
            .bind(&input.street_name)
            .bind(&input.location_details)
            .bind(&input.custom_data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a building. Its assignments cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
