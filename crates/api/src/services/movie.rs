//! Movie CRUD and title search.

use std::sync::Arc;

use dsmovie_core::error::CoreError;
use dsmovie_core::pagination::{Page, PageRequest};
use dsmovie_core::types::DbId;
use dsmovie_db::models::movie::{MovieDetail, MovieInput, MovieSummary};
use dsmovie_db::store::MovieStore;

use super::map_store_error;

const ENTITY: &str = "Movie";

/// Orchestrates movie reads and writes against a [`MovieStore`].
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    /// Page through movies whose title contains `title` (case-insensitive).
    ///
    /// An empty fragment matches every movie; no match is an empty page.
    pub async fn search(
        &self,
        title: &str,
        page: PageRequest,
    ) -> Result<Page<MovieSummary>, CoreError> {
        let movies = self
            .store
            .search_by_title(title, page)
            .await
            .map_err(|e| map_store_error(ENTITY, 0, e))?;
        Ok(movies.map(MovieSummary::from))
    }

    pub async fn fetch_by_id(&self, id: DbId) -> Result<MovieDetail, CoreError> {
        let movie = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| map_store_error(ENTITY, id, e))?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(movie.into())
    }

    pub async fn insert(&self, input: &MovieInput) -> Result<MovieSummary, CoreError> {
        let movie = self
            .store
            .insert(input)
            .await
            .map_err(|e| map_store_error(ENTITY, 0, e))?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie.into())
    }

    /// Replace the editable fields of movie `id`.
    ///
    /// The reference is taken without a separate existence check; a missing
    /// row surfaces from the store and becomes `NotFound`. The genre id is
    /// not checked up front.
    pub async fn update(&self, id: DbId, input: &MovieInput) -> Result<MovieSummary, CoreError> {
        let mut movie = self
            .store
            .get_reference(id)
            .await
            .map_err(|e| map_store_error(ENTITY, id, e))?;
        movie.apply(input);

        let saved = self
            .store
            .save(&movie)
            .await
            .map_err(|e| map_store_error(ENTITY, id, e))?;
        tracing::info!(movie_id = id, "Movie updated");
        Ok(saved.into())
    }

    /// Delete movie `id`.
    ///
    /// Existence is checked first so a missing movie (`NotFound`) is told
    /// apart from one that other rows still reference (`Conflict`).
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let exists = self
            .store
            .exists_by_id(id)
            .await
            .map_err(|e| map_store_error(ENTITY, id, e))?;
        if !exists {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| map_store_error(ENTITY, id, e))?;
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}
