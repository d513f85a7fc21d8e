//! Caller resolution and login lookups.

use std::collections::HashSet;
use std::sync::Arc;

use dsmovie_core::error::CoreError;
use dsmovie_core::identity::CallerIdentity;
use dsmovie_db::models::user::User;
use dsmovie_db::store::{StoreError, UserStore};

/// Everything needed to check a password and issue a token for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationDetail {
    pub username: String,
    pub password_hash: String,
    pub authorities: HashSet<String>,
}

/// Resolves users from a [`UserStore`].
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// The stored user behind `caller`.
    ///
    /// Fails with `AuthenticationFailure` when the identity carries no
    /// usable username or no user has that username.
    pub async fn current_user(&self, caller: &CallerIdentity) -> Result<User, CoreError> {
        let username = caller.username()?;
        self.store
            .find_by_username(username)
            .await
            .map_err(authentication_store_error)?
            .ok_or_else(|| {
                tracing::debug!(%username, "Caller does not resolve to a user");
                CoreError::AuthenticationFailure("User not found".into())
            })
    }

    /// Fold the (username, hash, role) rows of `username` into one record.
    pub async fn load_for_authentication(
        &self,
        username: &str,
    ) -> Result<AuthenticationDetail, CoreError> {
        let rows = self
            .store
            .search_user_and_roles_by_username(username)
            .await
            .map_err(authentication_store_error)?;

        let mut rows = rows.into_iter();
        let first = rows
            .next()
            .ok_or_else(|| CoreError::AuthenticationFailure("User not found".into()))?;

        let detail = rows.fold(
            AuthenticationDetail {
                username: first.username,
                password_hash: first.password_hash,
                authorities: HashSet::from([first.authority]),
            },
            |mut detail, row| {
                detail.authorities.insert(row.authority);
                detail
            },
        );
        Ok(detail)
    }
}

/// Store failures during user lookup never reveal more than "not found".
fn authentication_store_error(err: StoreError) -> CoreError {
    match err {
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "User lookup failed");
            CoreError::Internal(db_err.to_string())
        }
        other => CoreError::AuthenticationFailure(other.to_string()),
    }
}
