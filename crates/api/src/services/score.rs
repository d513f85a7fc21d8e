//! User scores and the movie averages derived from them.

use std::sync::Arc;

use dsmovie_core::error::CoreError;
use dsmovie_core::identity::CallerIdentity;
use dsmovie_db::models::movie::MovieSummary;
use dsmovie_db::models::score::{Score, ScoreInput};
use dsmovie_db::store::ScoreStore;

use super::{map_store_error, UserService};

const ENTITY: &str = "Movie";

/// Records a caller's score and refreshes the movie's average and count.
pub struct ScoreService {
    users: Arc<UserService>,
    scores: Arc<dyn ScoreStore>,
}

impl ScoreService {
    pub fn new(users: Arc<UserService>, scores: Arc<dyn ScoreStore>) -> Self {
        Self { users, scores }
    }

    /// Store the caller's score for `input.movie_id` (replacing any earlier
    /// one) and return the movie with its recomputed score and count.
    ///
    /// The write and the recomputation happen in a single store call, so
    /// concurrent scores for one movie are all counted.
    pub async fn save_score(
        &self,
        caller: &CallerIdentity,
        input: &ScoreInput,
    ) -> Result<MovieSummary, CoreError> {
        let user = self.users.current_user(caller).await?;
        let movie_id = input.movie_id;

        let saved = self
            .scores
            .record(&Score {
                movie_id,
                user_id: user.id,
                value: input.score,
            })
            .await
            .map_err(|e| map_store_error(ENTITY, movie_id, e))?;
        tracing::info!(movie_id, user_id = user.id, count = saved.count, "Score saved");
        Ok(saved.into())
    }
}
