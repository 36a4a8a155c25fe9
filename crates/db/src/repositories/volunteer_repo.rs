//! Repository for the `volunteers` table.

use sqlx::PgPool;

use khayr_core::types::DbId;

use crate::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, phone, working_area, notes, created_at, updated_at";

/// Provides CRUD operations for volunteers.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Insert a new volunteer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVolunteer) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteers (name, age, phone, working_area, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.phone)
            .bind(&input.working_area)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a volunteer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers WHERE id = $1");
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all volunteers, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Volunteer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteers ORDER BY created_at DESC");
        sqlx::query_as::<_, Volunteer>(&query).fetch_all(pool).await
    }

    /// Update a volunteer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVolunteer,
    ) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteers SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                phone = COALESCE($4, phone),
                working_area = COALESCE($5, working_area),
                notes = COALESCE($6, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.phone)
            .bind(&input.working_area)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a volunteer. Assignments referencing them cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
