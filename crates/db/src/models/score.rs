//! Score entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;
use dsmovie_core::types::DbId;

/// One user's score for one movie (`tb_score`). The pair is the key.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Score {
    pub movie_id: DbId,
    pub user_id: DbId,
    pub value: f64,
}

/// Client payload for `PUT /scores`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScoreInput {
    pub movie_id: DbId,

    #[validate(range(min = 0.0, max = 5.0, message = "Score must be between 0 and 5"))]
    pub score: f64,
}
