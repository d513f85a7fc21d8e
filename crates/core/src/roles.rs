//! Well-known authority constants.
//!
//! These must match the seed data in `20260101000002_create_users_and_roles.sql`.

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_CLIENT: &str = "ROLE_CLIENT";
