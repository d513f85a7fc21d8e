use axum::routing::put;
use axum::Router;

use crate::handlers::score;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// PUT /   -> save (client or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", put(score::save))
}
