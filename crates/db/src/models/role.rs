//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;
use dsmovie_core::types::DbId;

/// A role row from the `tb_role` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub authority: String,
}
