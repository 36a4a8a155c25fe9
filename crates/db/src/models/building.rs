//! Building entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use khayr_core::types::{DbId, Timestamp};

/// A building row from the `buildings` table.
///
/// Coordinates are captured from a map click at creation and never change
/// afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Building {
    pub id: DbId,
    pub building_number: Option<String>,
    pub street_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location_details: Option<String>,
    pub custom_data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a building from the map confirmation dialog.
#[derive(Debug, Deserialize)]
pub struct CreateBuilding {
    pub building_number: Option<String>,
    pub street_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location_details: Option<String>,
    pub custom_data: Option<serde_json::Value>,
}

/// DTO for editing a building. Coordinates are intentionally absent.
#[derive(Debug, Deserialize)]
pub struct UpdateBuilding {
    pub building_number: Option<String>,
    pub street_name: Option<String>,
    pub location_details: Option<String>,
    pub custom_data: Option<serde_json::Value>,
}
