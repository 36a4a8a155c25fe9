//! Repository for the `building_assignments` table.

use sqlx::PgPool;

use khayr_core::types::DbId;

use crate::models::assignment::{AssignmentWithVolunteer, BuildingAssignment, CreateAssignment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, building_id, volunteer_id, apartment_number, donor_number, notes, created_at";

/// Provides CRUD operations for building-volunteer assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Assign a volunteer to a building, returning the created row.
    ///
    /// Duplicate (building, volunteer) pairs are allowed: the same volunteer
    /// may cover several apartments of one building.
    pub async fn create(
        pool: &PgPool,
        building_id: DbId,
        input: &CreateAssignment,
    ) -> Result<BuildingAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO building_assignments
                (building_id, volunteer_id, apartment_number, donor_number, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BuildingAssignment>(&query)
            .bind(building_id)
            .bind(input.volunteer_id)
            .bind(&input.apartment_number)
            .bind(&input.donor_number)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List a building's assignments joined with volunteer name and working
    /// area, newest first.
    pub async fn list_for_building(
        pool: &PgPool,
        building_id: DbId,
    ) -> Result<Vec<AssignmentWithVolunteer>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentWithVolunteer>(
            "SELECT ba.id, ba.building_id, ba.volunteer_id, ba.apartment_number,
                    ba.donor_number, ba.notes, ba.created_at,
                    v.name AS volunteer_name, v.working_area AS volunteer_working_area
             FROM building_assignments ba
             JOIN volunteers v ON v.id = ba.volunteer_id
             WHERE ba.building_id = $1
             ORDER BY ba.created_at DESC",
        )
        .bind(building_id)
        .fetch_all(pool)
        .await
    }

    /// Delete an assignment. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM building_assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
