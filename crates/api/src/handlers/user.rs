//! Handler for `GET /users/me`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dsmovie_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/me
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let current = state.user_service.current_user(&user.identity).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from(current),
    }))
}
