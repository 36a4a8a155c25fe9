//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and strength rules.
//! - [`tokens`] -- access-token (JWT) and refresh-token handling.

pub mod password;
pub mod tokens;
