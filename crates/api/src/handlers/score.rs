//! Handler for `PUT /scores`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dsmovie_db::models::score::ScoreInput;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireClient;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/scores
///
/// Record the caller's score for a movie and return the movie with its
/// refreshed average and count.
pub async fn save(
    RequireClient(user): RequireClient,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ScoreInput>,
) -> AppResult<impl IntoResponse> {
    let movie = state
        .score_service
        .save_score(&user.identity, &input)
        .await?;
    Ok(Json(DataResponse { data: movie }))
}
