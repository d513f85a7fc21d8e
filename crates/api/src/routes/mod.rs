pub mod auth;
pub mod health;
pub mod movie;
pub mod score;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login        login (public)
///
/// /movies            search (public), create (admin)
/// /movies/{id}       get (public), update, delete (admin)
///
/// /scores            save score (client or admin)
///
/// /users/me          current user (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/movies", movie::router())
        .nest("/scores", score::router())
        .nest("/users", user::router())
}
