//! Shared response envelope types for API handlers.
//!
//! Entity endpoints wrap their payloads in a `{ "data": ... }` envelope;
//! the auth endpoints return their token payloads bare. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
