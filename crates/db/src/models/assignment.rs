//! Building-volunteer assignment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use khayr_core::types::{DbId, Timestamp};

/// An assignment row from the `building_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BuildingAssignment {
    pub id: DbId,
    pub building_id: DbId,
    pub volunteer_id: DbId,
    pub apartment_number: Option<String>,
    pub donor_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// An assignment joined with the volunteer it points at, as the buildings
/// screen displays it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentWithVolunteer {
    pub id: DbId,
    pub building_id: DbId,
    pub volunteer_id: DbId,
    pub apartment_number: Option<String>,
    pub donor_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub volunteer_name: String,
    pub volunteer_working_area: Option<String>,
}

/// DTO for assigning a volunteer to a building. The building id comes from
/// the URL path.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub volunteer_id: DbId,
    pub apartment_number: Option<String>,
    pub donor_number: Option<String>,
    pub notes: Option<String>,
}
