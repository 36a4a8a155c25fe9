//! Row structs and DTOs, one module per table.

pub mod assignment;
pub mod building;
pub mod category;
pub mod category_image;
pub mod role;
pub mod session;
pub mod user;
pub mod volunteer;
