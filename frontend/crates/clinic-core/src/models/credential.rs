use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Opaque bearer credential.
///
/// `Debug` is redacted so the token never ends up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token string. Blank tokens are rejected.
    #[track_caller]
    pub fn new(token: impl Into<String>) -> CoreResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CoreError::validation("credential cannot be empty"));
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
