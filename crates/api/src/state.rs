use std::sync::Arc;

use dsmovie_db::store::{
    MovieStore, PgMovieStore, PgScoreStore, PgUserStore, ScoreStore, UserStore,
};

use crate::config::ServerConfig;
use crate::services::{MovieService, ScoreService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health check).
    pub pool: dsmovie_db::DbPool,
    /// Server configuration (read by the auth extractors and login).
    pub config: Arc<ServerConfig>,
    pub movie_service: Arc<MovieService>,
    pub user_service: Arc<UserService>,
    pub score_service: Arc<ScoreService>,
}

impl AppState {
    /// Wire the services to the PostgreSQL stores on `pool`.
    pub fn new(pool: dsmovie_db::DbPool, config: ServerConfig) -> Self {
        let movies: Arc<dyn MovieStore> = Arc::new(PgMovieStore::new(pool.clone()));
        let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
        let scores: Arc<dyn ScoreStore> = Arc::new(PgScoreStore::new(pool.clone()));
        Self::with_stores(pool, config, movies, users, scores)
    }

    /// Wire the services to arbitrary store implementations.
    pub fn with_stores(
        pool: dsmovie_db::DbPool,
        config: ServerConfig,
        movies: Arc<dyn MovieStore>,
        users: Arc<dyn UserStore>,
        scores: Arc<dyn ScoreStore>,
    ) -> Self {
        let user_service = Arc::new(UserService::new(users));
        Self {
            pool,
            config: Arc::new(config),
            movie_service: Arc::new(MovieService::new(movies)),
            score_service: Arc::new(ScoreService::new(Arc::clone(&user_service), scores)),
            user_service,
        }
    }
}
