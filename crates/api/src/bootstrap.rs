//! First-run bootstrapping.
//!
//! On an empty `users` table, seeds an initial administrator account from
//! `ADMIN_EMAIL` / `ADMIN_PASSWORD`. Without this there is no way to log in
//! to a fresh deployment.

use khayr_core::roles::ROLE_ADMIN;
use khayr_db::models::user::CreateUser;
use khayr_db::repositories::{RoleRepo, UserRepo};
use khayr_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};

/// Errors during first-run bootstrapping. Startup aborts on any of these.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("ADMIN_PASSWORD rejected: {0}")]
    WeakPassword(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("The admin role is missing; did migrations run?")]
    MissingRole,
}

/// Seed the initial admin account if no users exist yet.
///
/// Does nothing when the table already has users, or when the bootstrap env
/// vars are unset (an empty deployment without credentials just logs a
/// warning and stays inaccessible).
pub async fn seed_initial_admin(pool: &DbPool) -> Result<(), BootstrapError> {
    let user_count = UserRepo::count(pool).await?;
    if user_count > 0 {
        return Ok(());
    }

    let (email, password) = match (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            tracing::warn!(
                "No users exist and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
                 nobody will be able to log in"
            );
            return Ok(());
        }
    };

    validate_password_strength(&password).map_err(BootstrapError::WeakPassword)?;

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or(BootstrapError::MissingRole)?;

    let password_hash =
        hash_password(&password).map_err(|e| BootstrapError::Hashing(e.to_string()))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email,
            display_name: Some("Administrator".into()),
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Seeded initial admin account");
    Ok(())
}
