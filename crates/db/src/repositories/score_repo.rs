//! Repository for the `tb_score` table.

use sqlx::PgPool;
use dsmovie_core::score::mean_score;
use dsmovie_core::types::DbId;

use crate::models::movie::Movie;
use crate::models::score::Score;
use crate::repositories::MovieRepo;

/// Provides score writes and the movie aggregates derived from them.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Store `score` (overwriting this user's earlier value for the movie)
    /// and refresh the movie's mean score and count, all in one transaction.
    ///
    /// The movie row is locked first, so concurrent recordings for the same
    /// movie apply one after the other. Returns `None` if the movie does not
    /// exist.
    pub async fn record(pool: &PgPool, score: &Score) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !MovieRepo::lock_for_update(&mut tx, score.movie_id).await? {
            return Ok(None);
        }

        Self::upsert_inner(&mut tx, score).await?;
        let values = Self::values_inner(&mut tx, score.movie_id).await?;
        let movie = MovieRepo::set_score(
            &mut tx,
            score.movie_id,
            mean_score(&values),
            values.len() as i32,
        )
        .await?;

        tx.commit().await?;
        Ok(Some(movie))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn upsert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        score: &Score,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tb_score (movie_id, user_id, value) VALUES ($1, $2, $3) \
             ON CONFLICT (movie_id, user_id) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(score.movie_id)
        .bind(score.user_id)
        .bind(score.value)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn values_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
    ) -> Result<Vec<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, f64>("SELECT value FROM tb_score WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_all(&mut **tx)
            .await
    }
}
