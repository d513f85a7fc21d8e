//! The per-request caller identity.
//!
//! Built from the bearer token by the HTTP layer and handed explicitly to
//! every service call that needs to know who is calling.

use crate::error::CoreError;

/// Who is making the current request, as far as the token says.
///
/// A token without a usable username produces an identity that cannot be
/// resolved; services reject it with [`CoreError::AuthenticationFailure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    username: Option<String>,
}

impl CallerIdentity {
    pub fn from_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// An identity with no principal attached.
    pub fn anonymous() -> Self {
        Self { username: None }
    }

    /// The caller's username, or an authentication failure when the
    /// principal is absent or blank.
    pub fn username(&self) -> Result<&str, CoreError> {
        match self.username.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(CoreError::AuthenticationFailure(
                "Caller has no username".into(),
            )),
        }
    }
}

impl From<Option<String>> for CallerIdentity {
    fn from(username: Option<String>) -> Self {
        Self { username }
    }
}
