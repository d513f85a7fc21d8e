//! Repository for the `tb_movie` table.
//!
//! Every read joins `tb_genre` so rows carry the genre display name.

use sqlx::PgPool;
use dsmovie_core::pagination::PageRequest;
use dsmovie_core::types::DbId;

use crate::models::movie::{Movie, MovieInput};

/// Column list shared across queries, aliased `m` (movie) and `g` (genre).
const COLUMNS: &str = "m.id, m.title, m.score, m.count, m.image, m.genre_id, g.name AS genre_name";

/// Provides CRUD and title search for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// Fails with a foreign-key violation when `genre_id` does not exist.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "WITH m AS ( \
                INSERT INTO tb_movie (title, score, count, image, genre_id) \
                VALUES ($1, $2, $3, $4, $5) \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM m JOIN tb_genre g ON g.id = m.genre_id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.score)
            .bind(input.count)
            .bind(&input.image)
            .bind(input.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tb_movie m JOIN tb_genre g ON g.id = m.genre_id WHERE m.id = $1"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search on title, ordered by id.
    pub async fn search_by_title(
        pool: &PgPool,
        fragment: &str,
        page: PageRequest,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tb_movie m JOIN tb_genre g ON g.id = m.genre_id \
             WHERE m.title ILIKE '%' || $1 || '%' \
             ORDER BY m.id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(fragment)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count movies whose title contains `fragment` (case-insensitive).
    pub async fn count_by_title(pool: &PgPool, fragment: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tb_movie WHERE title ILIKE '%' || $1 || '%'",
        )
        .bind(fragment)
        .fetch_one(pool)
        .await
    }

    /// Write every editable column of `movie` back to its row.
    ///
    /// Returns `None` if no row with `movie.id` exists.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "WITH m AS ( \
                UPDATE tb_movie SET \
                    title = $2, \
                    score = $3, \
                    count = $4, \
                    image = $5, \
                    genre_id = $6 \
                WHERE id = $1 \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM m JOIN tb_genre g ON g.id = m.genre_id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(movie.score)
            .bind(movie.count)
            .bind(&movie.image)
            .bind(movie.genre_id)
            .fetch_optional(pool)
            .await
    }

    /// Lock the movie row until `tx` ends. Returns `false` if there is no
    /// such movie.
    pub async fn lock_for_update(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM tb_movie WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(locked.is_some())
    }

    /// Overwrite only the aggregate score columns of a locked movie.
    pub async fn set_score(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        score: f64,
        count: i32,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "WITH m AS ( \
                UPDATE tb_movie SET score = $2, count = $3 WHERE id = $1 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM m JOIN tb_genre g ON g.id = m.genre_id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(score)
            .bind(count)
            .fetch_one(&mut **tx)
            .await
    }

    /// Returns `true` if a movie with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tb_movie WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while scores still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tb_movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
