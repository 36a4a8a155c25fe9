//! Access and refresh token primitives.
//!
//! Access tokens are short-lived HS256 JWTs carrying the user's id and role.
//! Refresh tokens are opaque random strings; only their SHA-256 digest is
//! persisted, so a leaked sessions table cannot be replayed against the API.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use khayr_core::types::DbId;

use crate::config::JwtConfig;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// The user's internal database id.
    pub sub: DbId,
    /// Role name at issue time.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly minted refresh token. The plaintext goes to the client; only
/// the hash is stored.
pub struct RefreshToken {
    pub plaintext: String,
    pub hash: String,
}

/// Sign a new access token for the given user.
pub fn issue_access_token(
    cfg: &JwtConfig,
    user_id: DbId,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        sub: user_id,
        role: role.to_owned(),
        iat: now,
        exp: now + cfg.access_ttl_mins * 60,
    };
    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(cfg.secret.as_bytes()),
    )
}

/// Verify an access token's signature and expiry, returning its claims.
pub fn decode_access_token(
    cfg: &JwtConfig,
    token: &str,
) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Mint a random refresh token together with its storage hash.
pub fn mint_refresh_token() -> RefreshToken {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_refresh_token(&plaintext);
    RefreshToken { plaintext, hash }
}

/// SHA-256 hex digest of a refresh token, for lookup against stored hashes.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
