use crate::ClientResult;

use clinic_core::{Candidate, Credential, DirectoryKind, Identity};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Remote authentication operations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange username and password for a bearer credential.
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse>;

    /// Resolve the identity behind a credential.
    async fn me(&self, credential: &Credential) -> ClientResult<Identity>;
}

/// Remote directory lookups.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn search(
        &self,
        kind: DirectoryKind,
        query: &str,
        credential: Option<&Credential>,
    ) -> ClientResult<Vec<Candidate>>;
}
