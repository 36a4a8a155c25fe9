use std::sync::Arc;

use khayr_geo::GeocodingClient;
use khayr_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: khayr_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object store holding uploaded category images.
    pub store: Arc<ObjectStore>,
    /// Client for the external geocoding service.
    pub geocoder: Arc<GeocodingClient>,
}
