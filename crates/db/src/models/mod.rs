//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` input DTOs for writes
//! - `Serialize` response DTOs where the row is not exposed directly

pub mod genre;
pub mod movie;
pub mod role;
pub mod score;
pub mod user;
