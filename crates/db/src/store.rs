//! Store boundary consumed by the service layer.
//!
//! Services depend on these traits rather than on the repositories so they
//! can run against in-memory fakes in unit tests. The `Pg*` types are the
//! production implementations and delegate to the zero-sized repositories.

use async_trait::async_trait;
use dsmovie_core::pagination::{Page, PageRequest};
use dsmovie_core::types::DbId;

use crate::models::movie::{Movie, MovieInput};
use crate::models::score::Score;
use crate::models::user::{User, UserDetailsProjection};
use crate::repositories::{MovieRepo, ScoreRepo, UserRepo};
use crate::DbPool;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Signals raised by a store call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id handed to a reference-based call has no row behind it.
    #[error("Referenced entity with id {0} does not exist")]
    ReferenceNotFound(DbId),

    /// A write was rejected by a foreign-key constraint.
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::IntegrityViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations on movies.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>>;

    /// Case-insensitive substring match on title.
    async fn search_by_title(&self, fragment: &str, page: PageRequest) -> StoreResult<Page<Movie>>;

    /// Insert a new movie; the store assigns the id.
    async fn insert(&self, input: &MovieInput) -> StoreResult<Movie>;

    /// Obtain a movie to mutate. Fails with [`StoreError::ReferenceNotFound`]
    /// when `id` has no row.
    async fn get_reference(&self, id: DbId) -> StoreResult<Movie>;

    /// Persist every field of an existing movie. Fails with
    /// [`StoreError::ReferenceNotFound`] when the row is gone at write time.
    async fn save(&self, movie: &Movie) -> StoreResult<Movie>;

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool>;

    /// Fails with [`StoreError::IntegrityViolation`] while other rows
    /// reference the movie, and with [`StoreError::ReferenceNotFound`] when
    /// nothing was deleted.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<()>;
}

/// Persistence operations on users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn search_user_and_roles_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Vec<UserDetailsProjection>>;
}

/// Persistence operations on user scores.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Store `score`, replacing the user's earlier value for the movie, and
    /// refresh the movie's mean score and count as one atomic unit. Only the
    /// score and count columns of the movie are written.
    ///
    /// Fails with [`StoreError::ReferenceNotFound`] when the movie does not
    /// exist.
    async fn record(&self, score: &Score) -> StoreResult<Movie>;
}

// ---------------------------------------------------------------------------
// PostgreSQL implementations
// ---------------------------------------------------------------------------

/// [`MovieStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn search_by_title(&self, fragment: &str, page: PageRequest) -> StoreResult<Page<Movie>> {
        let total = MovieRepo::count_by_title(&self.pool, fragment).await?;
        let content = MovieRepo::search_by_title(&self.pool, fragment, page).await?;
        Ok(Page::new(content, page, total))
    }

    async fn insert(&self, input: &MovieInput) -> StoreResult<Movie> {
        Ok(MovieRepo::create(&self.pool, input).await?)
    }

    async fn get_reference(&self, id: DbId) -> StoreResult<Movie> {
        MovieRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::ReferenceNotFound(id))
    }

    async fn save(&self, movie: &Movie) -> StoreResult<Movie> {
        MovieRepo::update(&self.pool, movie)
            .await?
            .ok_or(StoreError::ReferenceNotFound(movie.id))
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(MovieRepo::exists(&self.pool, id).await?)
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<()> {
        if !MovieRepo::delete(&self.pool, id).await? {
            tracing::debug!(movie_id = id, "Delete matched no rows");
            return Err(StoreError::ReferenceNotFound(id));
        }
        Ok(())
    }
}

/// [`UserStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn search_user_and_roles_by_username(
        &self,
        username: &str,
    ) -> StoreResult<Vec<UserDetailsProjection>> {
        Ok(UserRepo::search_user_and_roles_by_username(&self.pool, username).await?)
    }
}

/// [`ScoreStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgScoreStore {
    pool: DbPool,
}

impl PgScoreStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn record(&self, score: &Score) -> StoreResult<Movie> {
        ScoreRepo::record(&self.pool, score)
            .await?
            .ok_or(StoreError::ReferenceNotFound(score.movie_id))
    }
}
