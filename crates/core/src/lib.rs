//! Domain types shared by the dsmovie crates.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these definitions.

pub mod error;
pub mod identity;
pub mod pagination;
pub mod roles;
pub mod score;
pub mod types;
pub mod validation;
