//! Request body extractor that deserializes and validates in one step.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use dsmovie_core::error::CoreError;
use dsmovie_core::validation::flatten_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `validator` rules.
///
/// A body that is not valid JSON for `T` is rejected as `BAD_REQUEST`; one
/// that parses but breaks a rule is rejected as `VALIDATION_ERROR`. Either
/// way the handler never runs.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<MovieInput>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(flatten_errors(&errors))))?;

        Ok(Self(value))
    }
}
