//! Handlers for the `/movies` resource.
//!
//! Reads are public; writes require `ROLE_ADMIN`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dsmovie_core::types::DbId;
use dsmovie_db::models::movie::MovieInput;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireAdmin;
use crate::query::MovieSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies?title=&page=&size=
///
/// Page through movies whose title contains `title` (case-insensitive).
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .movie_service
        .search(params.title(), params.page_request())
        .await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movie_service.fetch_by_id(id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movie_service.insert(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movie_service.update(id, &input).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
///
/// 204 on success, 404 when absent, 409 when scores still reference it.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.movie_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
