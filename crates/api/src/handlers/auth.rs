//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use dsmovie_core::error::CoreError;
use dsmovie_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::check_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub authorities: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and return a bearer token.
/// Unknown users and wrong passwords get the same 401.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let detail = state
        .user_service
        .load_for_authentication(&input.username)
        .await
        .map_err(|e| match e {
            CoreError::AuthenticationFailure(_) => invalid_credentials(),
            other => AppError::Core(other),
        })?;

    check_password(&input.password, &detail.password_hash, INVALID_CREDENTIALS).inspect_err(
        |_| tracing::debug!(username = %detail.username, "Login rejected"),
    )?;

    let mut authorities: Vec<String> = detail.authorities.into_iter().collect();
    authorities.sort();

    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&detail.username, &authorities, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %detail.username, "User logged in");
    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
        authorities,
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::AuthenticationFailure(INVALID_CREDENTIALS.into()))
}
