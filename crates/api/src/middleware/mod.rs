//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Caller identity from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires `ROLE_ADMIN`.
//! - [`rbac::RequireClient`] -- Requires `ROLE_CLIENT` or `ROLE_ADMIN`.

pub mod auth;
pub mod rbac;
