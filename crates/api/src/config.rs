/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory of the uploaded-media store (default:
    /// `data/category-images`). Served under [`Self::media_public_base`].
    pub media_root: String,
    /// Public base URL uploaded media is served from (default: `/media`).
    pub media_public_base: String,
    /// Directory of the built public-site frontend, served as a fallback
    /// (default: `public`).
    pub public_dir: String,
    /// Base URL of the geocoding service (default: public Nominatim).
    pub geocoder_base_url: String,
    /// Token signing configuration.
    pub jwt: JwtConfig,
}

/// HS256 signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_ttl_mins: i64,
    /// Refresh token lifetime in days.
    pub refresh_ttl_days: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                               |
    /// |---------------------------|---------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                             |
    /// | `PORT`                    | `3000`                                |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`               |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                  |
    /// | `MEDIA_ROOT`              | `data/category-images`                |
    /// | `MEDIA_PUBLIC_BASE`       | `/media`                              |
    /// | `PUBLIC_DIR`              | `public`                              |
    /// | `GEOCODER_BASE_URL`       | `https://nominatim.openstreetmap.org` |
    /// | `JWT_SECRET`              | **required**, must be non-empty       |
    /// | `JWT_ACCESS_EXPIRY_MINS`  | `15`                                  |
    /// | `JWT_REFRESH_EXPIRY_DAYS` | `7`                                   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset or empty, or if a numeric variable
    /// fails to parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_root =
            std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "data/category-images".into());

        let media_public_base =
            std::env::var("MEDIA_PUBLIC_BASE").unwrap_or_else(|_| "/media".into());

        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into());

        let geocoder_base_url = std::env::var("GEOCODER_BASE_URL")
            .unwrap_or_else(|_| khayr_geo::DEFAULT_BASE_URL.into());

        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_ttl_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_ttl_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| "7".into())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_root,
            media_public_base,
            public_dir,
            geocoder_base_url,
            jwt: JwtConfig {
                secret,
                access_ttl_mins,
                refresh_ttl_days,
            },
        }
    }
}
