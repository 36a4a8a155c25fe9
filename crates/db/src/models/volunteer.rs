//! Volunteer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use khayr_core::types::{DbId, Timestamp};

/// A volunteer row from the `volunteers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Volunteer {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub working_area: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new volunteer. Only the name is required.
#[derive(Debug, Deserialize)]
pub struct CreateVolunteer {
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub working_area: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing volunteer. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateVolunteer {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub working_area: Option<String>,
    pub notes: Option<String>,
}
