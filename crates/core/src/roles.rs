//! Role name constants matching the `roles` seed data.

/// Full access to the admin area, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// Day-to-day data entry access, without user management.
pub const ROLE_OPERATOR: &str = "operator";
