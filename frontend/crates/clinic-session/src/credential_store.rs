use crate::{KeyValueStore, StoreResult};

use clinic_core::Credential;

use std::sync::Arc;

use log::warn;

/// The session credential, kept under one fixed key of a durable store.
///
/// Absence of the key is the only "no session" signal.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the credential. A blank stored value counts as absent.
    pub fn load(&self) -> StoreResult<Option<Credential>> {
        let value = self.store.get(&self.key)?;
        Ok(value.and_then(|token| match Credential::new(token) {
            Ok(credential) => Some(credential),
            Err(e) => {
                warn!("Ignoring stored credential under '{}': {e}", self.key);
                None
            }
        }))
    }

    /// Writes the credential, retrying once after a transient I/O failure.
    pub fn save(&self, credential: &Credential) -> StoreResult<()> {
        match self.store.set(&self.key, credential.expose()) {
            Err(e) if e.is_transient() => {
                warn!("Retrying credential write under '{}': {e}", self.key);
                self.store.set(&self.key, credential.expose())
            }
            result => result,
        }
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
