//! Service layer.
//!
//! Services own `Arc<dyn Store>` handles and hold the create/update/delete
//! and authentication decision logic. Every public operation returns
//! `Result<_, CoreError>`; raw store signals never leave this module.

pub mod movie;
pub mod score;
pub mod user;

#[cfg(test)]
pub(crate) mod fakes;

pub use movie::MovieService;
pub use score::ScoreService;
pub use user::{AuthenticationDetail, UserService};

use dsmovie_core::error::CoreError;
use dsmovie_core::types::DbId;
use dsmovie_db::store::StoreError;

/// Translate a store signal raised while working on `entity` `id`.
///
/// - `ReferenceNotFound` becomes `NotFound`.
/// - `IntegrityViolation` becomes `Conflict`.
/// - Anything else is logged and becomes `Internal`.
pub(crate) fn map_store_error(entity: &'static str, id: DbId, err: StoreError) -> CoreError {
    match err {
        StoreError::ReferenceNotFound(_) => CoreError::NotFound { entity, id },
        StoreError::IntegrityViolation(constraint) => {
            tracing::warn!(entity, id, %constraint, "Referential integrity failure");
            CoreError::Conflict("Referential integrity failure".into())
        }
        StoreError::Database(db_err) => {
            tracing::error!(entity, id, error = %db_err, "Store error");
            CoreError::Internal(db_err.to_string())
        }
    }
}
