//! Repository for the `tb_genre` table.

use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

/// Provides write operations for genres. Reads go through the movie join.
///
/// No route creates genres; this exists for seeding fixtures in tests and
/// tooling.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO tb_genre (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
