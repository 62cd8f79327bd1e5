
use crate::{CredentialStore, KeyValueStore, MemoryKeyValueStore, SessionStore};

use clinic_client::{AuthApi, ClientError, ClientResult, LoginResponse};
use clinic_config::RouteConfig;
use clinic_core::{Credential, Identity, Role};

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub(crate) const CREDENTIAL_KEY: &str = "access_token";

pub(crate) fn identity(id: &str, role: Role) -> Identity {
    Identity {
        id: id.to_string(),
        email: format!("{id}@clinic.test"),
        display_name: None,
        role,
        is_active: Some(true),
        is_verified: Some(true),
        avatar_url: None,
        phone: None,
        hospital_id: Some("h-1".to_string()),
    }
}

/// In-process stand-in for the auth endpoints.
#[derive(Default)]
pub(crate) struct FakeAuth {
    accounts: Vec<(String, String, String)>,
    identities: Mutex<HashMap<String, Identity>>,
    network_down: AtomicBool,
    me_delay: Duration,
    me_script: Mutex<VecDeque<(Duration, bool)>>,
    me_calls: AtomicUsize,
    login_calls: AtomicUsize,
}

impl FakeAuth {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers an account whose login yields `token`, resolving to `identity`.
    pub(crate) fn with_account(
        mut self,
        username: &str,
        password: &str,
        token: &str,
        identity: Identity,
    ) -> Self {
        self.accounts
            .push((username.to_string(), password.to_string(), token.to_string()));
        self.identities
            .get_mut()
            .unwrap()
            .insert(token.to_string(), identity);
        self
    }

    pub(crate) fn with_me_delay(mut self, delay: Duration) -> Self {
        self.me_delay = delay;
        self
    }

    /// Scripts the next whoami call: its latency and whether the server is
    /// reachable. Unscripted calls use `me_delay` and the network flag.
    pub(crate) fn queue_me(&self, delay: Duration, reachable: bool) {
        self.me_script.lock().unwrap().push_back((delay, reachable));
    }

    pub(crate) fn set_network_down(&self, down: bool) {
        self.network_down.store(down, Ordering::SeqCst);
    }

    pub(crate) fn replace_identity(&self, token: &str, identity: Identity) {
        self.identities
            .lock()
            .unwrap()
            .insert(token.to_string(), identity);
    }

    pub(crate) fn me_calls(&self) -> usize {
        self.me_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if self.network_down.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(503, "UNAVAILABLE", "server down"));
        }

        self.accounts
            .iter()
            .find(|(u, p, _)| u == username && p == password)
            .map(|(_, _, token)| LoginResponse {
                access_token: token.clone(),
            })
            .ok_or_else(|| ClientError::unauthorized(401, "Invalid credentials"))
    }

    async fn me(&self, credential: &Credential) -> ClientResult<Identity> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.me_script.lock().unwrap().pop_front();
        let (delay, reachable) =
            scripted.unwrap_or((self.me_delay, !self.network_down.load(Ordering::SeqCst)));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if !reachable {
            return Err(ClientError::api_error(503, "UNAVAILABLE", "server down"));
        }

        self.identities
            .lock()
            .unwrap()
            .get(credential.expose())
            .cloned()
            .ok_or_else(|| ClientError::unauthorized(401, "Token expired"))
    }
}

/// Session store over an in-memory credential store.
pub(crate) fn session_with(
    auth: Arc<FakeAuth>,
    stored_token: Option<&str>,
) -> (SessionStore, Arc<MemoryKeyValueStore>) {
    let kv = Arc::new(MemoryKeyValueStore::new());
    if let Some(token) = stored_token {
        kv.set(CREDENTIAL_KEY, token).unwrap();
    }
    let credentials = CredentialStore::new(kv.clone(), CREDENTIAL_KEY);
    let store = SessionStore::new(auth, credentials, RouteConfig::default());
    (store, kv)
}
