//! Handlers for the `/geocode` endpoints backing the map screen.
//!
//! Search only re-centers the map on the client; it never creates records.
//! Reverse lookup pre-fills the building confirmation dialog after a map
//! click. Every field of the prefill stays editable on the client, so a
//! sparse or empty reverse result is fine.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use khayr_core::validation::validate_coordinates;
use khayr_geo::{ReverseAddress, SearchMatch};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /geocode/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Query parameters for `GET /geocode/reverse`.
#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Coordinate match returned by forward search.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl From<SearchMatch> for SearchResult {
    fn from(m: SearchMatch) -> Self {
        Self {
            latitude: m.latitude,
            longitude: m.longitude,
            display_name: m.display_name,
        }
    }
}

/// Pre-filled building form fields derived from a reverse lookup.
#[derive(Debug, Serialize, PartialEq)]
pub struct BuildingPrefill {
    pub building_number: Option<String>,
    pub street_name: Option<String>,
    pub location_details: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl BuildingPrefill {
    /// Map the reverse-geocoded address onto form fields: house number to
    /// building number, road to street name, the full display name to
    /// location details.
    fn from_address(address: ReverseAddress, latitude: f64, longitude: f64) -> Self {
        Self {
            building_number: address.house_number,
            street_name: address.road,
            location_details: address.display_name,
            latitude,
            longitude,
        }
    }
}

/// GET /api/v1/geocode/search?q=…
///
/// Returns the best single match, or 204 No Content when the service finds
/// nothing for the query.
pub async fn search(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Query(params): Query<SearchQuery>,
) -> AppResult<Response> {
    match state.geocoder.search(&params.q).await? {
        Some(m) => Ok(Json(DataResponse {
            data: SearchResult::from(m),
        })
        .into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/v1/geocode/reverse?lat=…&lng=…
pub async fn reverse(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Query(params): Query<ReverseQuery>,
) -> AppResult<Json<DataResponse<BuildingPrefill>>> {
    validate_coordinates(params.lat, params.lng)?;
    let address = state.geocoder.reverse(params.lat, params.lng).await?;
    Ok(Json(DataResponse {
        data: BuildingPrefill::from_address(address, params.lat, params.lng),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_field_mapping() {
        let address = ReverseAddress {
            house_number: Some("12".into()),
            road: Some("Main St".into()),
            display_name: Some("12, Main St, Somewhere".into()),
        };
        let prefill = BuildingPrefill::from_address(address, 31.5, 34.47);
        assert_eq!(prefill.building_number.as_deref(), Some("12"));
        assert_eq!(prefill.street_name.as_deref(), Some("Main St"));
        assert_eq!(
            prefill.location_details.as_deref(),
            Some("12, Main St, Somewhere")
        );
        assert_eq!(prefill.latitude, 31.5);
        assert_eq!(prefill.longitude, 34.47);
    }

    #[test]
    fn test_prefill_from_empty_address_keeps_coordinates() {
        let prefill = BuildingPrefill::from_address(ReverseAddress::default(), -10.0, 20.0);
        assert_eq!(prefill.building_number, None);
        assert_eq!(prefill.street_name, None);
        assert_eq!(prefill.location_details, None);
        assert_eq!(prefill.latitude, -10.0);
        assert_eq!(prefill.longitude, 20.0);
    }
}
