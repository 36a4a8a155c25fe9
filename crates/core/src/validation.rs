//! Field validation helpers for the admin entities.
//!
//! Validation lives here, not in the API layer, so repositories and any
//! future import tooling enforce the same rules.

use crate::error::CoreError;

/// Validate that a required name field is present after trimming.
///
/// Used for category and volunteer names, which are the only fields the
/// admin area treats as mandatory text.
pub fn validate_required_name(name: &str, entity: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{entity} name is required")));
    }
    Ok(())
}

/// Validate a WGS84 coordinate pair captured from a map click.
///
/// Coordinates are set once at building creation and never updated, so this
/// is the single place they are checked.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), CoreError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "Latitude {latitude} is out of range [-90, 90]"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "Longitude {longitude} is out of range [-180, 180]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert!(validate_required_name("Food parcels", "Category").is_ok());
        assert!(validate_required_name("", "Category").is_err());
        assert!(validate_required_name("   ", "Category").is_err());
    }

    #[test]
    fn test_name_error_mentions_entity() {
        let err = validate_required_name("", "Volunteer").unwrap_err();
        assert!(err.to_string().contains("Volunteer"));
    }

    #[test]
    fn test_coordinates_in_range() {
        assert!(validate_coordinates(31.5, 34.47).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert!(validate_coordinates(90.1, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
        assert!(validate_coordinates(0.0, f64::INFINITY).is_err());
    }
}
