//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod building_repo;
pub mod category_image_repo;
pub mod category_repo;
pub mod role_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod volunteer_repo;

pub use assignment_repo::AssignmentRepo;
pub use building_repo::BuildingRepo;
pub use category_image_repo::CategoryImageRepo;
pub use category_repo::CategoryRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use volunteer_repo::VolunteerRepo;
