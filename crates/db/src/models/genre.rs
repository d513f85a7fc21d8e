//! Genre entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use dsmovie_core::types::DbId;

/// A row from the `tb_genre` table.
///
/// Genres are shared lookup values; many movies point at one genre and
/// deleting a movie never touches its genre.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new genre. Used when seeding, not by any route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}
