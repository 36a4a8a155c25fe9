//! Client for the Nominatim geocoding service.
//!
//! Two single-shot operations, matching what the map screen needs:
//!
//! - [`GeocodingClient::search`] -- free text to the best single coordinate
//!   match (used to re-center the map, never to create records).
//! - [`GeocodingClient::reverse`] -- coordinate to structured address fields
//!   (used to pre-fill the building confirmation dialog).
//!
//! No retries, caching, or rate limiting: a transport failure is surfaced to
//! the operator and the prior UI state is left unchanged.

use serde::Deserialize;

/// Default public Nominatim endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// User-Agent sent with every request. Nominatim's usage policy rejects
/// requests without an identifying agent.
const USER_AGENT: &str = concat!("khayr-admin/", env!("CARGO_PKG_VERSION"));

/// Errors from the geocoding layer.
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Geocoding service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service returned a coordinate that does not parse as a float.
    #[error("Geocoding service returned an unparseable coordinate: {0}")]
    BadCoordinate(String),
}

/// Best single match for a free-text search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Structured address from a reverse lookup.
///
/// Fields the service did not resolve are `None`; an entirely empty result
/// is valid (e.g. a click in open water).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReverseAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One entry of the `/search` response array. Nominatim returns coordinates
/// as strings.
#[derive(Debug, Deserialize)]
struct SearchEntry {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

/// The `/reverse` response body.
#[derive(Debug, Deserialize)]
struct ReverseEntry {
    #[serde(default)]
    address: Option<AddressDetails>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddressDetails {
    #[serde(default)]
    house_number: Option<String>,
    #[serde(default)]
    road: Option<String>,
}

impl SearchEntry {
    fn into_match(self) -> Result<SearchMatch, GeoError> {
        let latitude: f64 = self
            .lat
            .parse()
            .map_err(|_| GeoError::BadCoordinate(self.lat.clone()))?;
        let longitude: f64 = self
            .lon
            .parse()
            .map_err(|_| GeoError::BadCoordinate(self.lon.clone()))?;
        Ok(SearchMatch {
            latitude,
            longitude,
            display_name: self.display_name,
        })
    }
}

impl From<ReverseEntry> for ReverseAddress {
    fn from(entry: ReverseEntry) -> Self {
        let (house_number, road) = match entry.address {
            Some(a) => (a.house_number, a.road),
            None => (None, None),
        };
        ReverseAddress {
            house_number,
            road,
            display_name: entry.display_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for one geocoding endpoint.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Forward search: free text to the best single match.
    ///
    /// Sends `GET /search?q=…&format=json&limit=1`. Returns `None` when the
    /// service finds nothing.
    pub async fn search(&self, query: &str) -> Result<Option<SearchMatch>, GeoError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let mut entries: Vec<SearchEntry> = response.json().await?;

        let first = entries.drain(..).next();
        match first {
            Some(entry) => Ok(Some(entry.into_match()?)),
            None => Ok(None),
        }
    }

    /// Reverse lookup: coordinate to structured address.
    ///
    /// Sends `GET /reverse?lat=…&lon=…&format=json&addressdetails=1`.
    /// Fields the service cannot resolve come back as `None`.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<ReverseAddress, GeoError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let entry: ReverseEntry = response.json().await?;
        Ok(entry.into())
    }

    /// Turn a non-2xx response into [`GeoError::Api`] with the body attached.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GeoError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(GeoError::Api {
            status: status.as_u16(),
            body,
        })
    }
}
