//! User entity model, DTOs and the login projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use dsmovie_core::types::DbId;

/// Full user row from the `tb_user` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}

/// One (user, role) pair flattened for login.
///
/// A user with two roles yields two rows that share `username` and
/// `password_hash`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserDetailsProjection {
    pub username: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub authority: String,
}
