//! Domain core for the khayr campaign backend.
//!
//! Pure types and logic shared by the database, storage, and API crates:
//! the error taxonomy, id/timestamp aliases, role names, field validation,
//! gallery filtering, and object-key naming for uploaded media.

pub mod error;
pub mod media;
pub mod objects;
pub mod roles;
pub mod types;
pub mod validation;
