use clinic_client::{ClientResult, DirectoryApi};
use clinic_core::{Candidate, Credential, DirectoryKind};

use std::sync::Arc;

use async_trait::async_trait;

/// The directory lookup a typeahead runs against.
#[async_trait]
pub trait RemoteSearch: Send + Sync {
    async fn search(&self, query: &str) -> ClientResult<Vec<Candidate>>;
}

/// Binds a `DirectoryApi` to one directory kind and credential.
pub struct DirectorySearch<A: DirectoryApi + ?Sized> {
    api: Arc<A>,
    kind: DirectoryKind,
    credential: Option<Credential>,
}

impl<A: DirectoryApi + ?Sized> DirectorySearch<A> {
    pub fn new(api: Arc<A>, kind: DirectoryKind, credential: Option<Credential>) -> Self {
        Self {
            api,
            kind,
            credential,
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }
}

#[async_trait]
impl<A: DirectoryApi + ?Sized> RemoteSearch for DirectorySearch<A> {
    async fn search(&self, query: &str) -> ClientResult<Vec<Candidate>> {
        self.api
            .search(self.kind, query, self.credential.as_ref())
            .await
    }
}
