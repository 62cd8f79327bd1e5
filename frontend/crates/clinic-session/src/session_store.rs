use crate::{CredentialStore, Navigation, SessionResult, SessionState};

use clinic_client::AuthApi;
use clinic_config::RouteConfig;
use clinic_core::{Credential, Identity, ProfileUpdate};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error, info, warn};
use tokio::sync::watch;

/// Single source of truth for who is logged in.
///
/// Starts in `Loading`; the host calls `fetch_user` once at startup to
/// settle it. Afterwards only `login`, `logout`, `fetch_user` and
/// `update_profile` move the state, and observers follow it through
/// `subscribe`.
///
/// Every `fetch_user`, login and logout takes the next number of one
/// sequence. A whoami answer is applied only while its call still holds the
/// newest number; older answers are dropped without touching the state or
/// the credential, so a slow check can neither resurrect a session the user
/// left nor log out one a newer check confirmed.
pub struct SessionStore {
    auth: Arc<dyn AuthApi>,
    credentials: CredentialStore,
    routes: RouteConfig,
    state: watch::Sender<SessionState>,
    sequence: AtomicU64,
}

impl SessionStore {
    pub fn new(auth: Arc<dyn AuthApi>, credentials: CredentialStore, routes: RouteConfig) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        Self {
            auth,
            credentials,
            routes,
            state,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    /// True iff the current identity is a hospital or super admin.
    pub fn is_admin(&self) -> bool {
        self.state
            .borrow()
            .identity()
            .is_some_and(Identity::is_admin)
    }

    pub fn routes(&self) -> &RouteConfig {
        &self.routes
    }

    /// The persisted credential, for authorising directory searches.
    pub fn credential(&self) -> Option<Credential> {
        self.stored_credential()
    }

    /// Resolves the session against the whoami endpoint.
    ///
    /// The newest call always settles `Loading`; a superseded call returns the
    /// current state untouched. Any failure of the newest call erases the
    /// stored credential and ends unauthenticated.
    pub async fn fetch_user(&self) -> SessionState {
        let stamp = self.next_sequence();

        let Some(credential) = self.stored_credential() else {
            debug!("No stored credential; session is unauthenticated");
            self.transition(SessionState::Unauthenticated);
            return self.state();
        };

        let outcome = self.auth.me(&credential).await;

        if self.sequence.load(Ordering::SeqCst) != stamp {
            debug!("Discarding superseded whoami response (call {stamp})");
            return self.state();
        }

        match outcome {
            Ok(identity) => {
                info!("Session authenticated: {} ({})", identity.id, identity.role);
                self.transition(SessionState::Authenticated(identity));
            }
            Err(e) => {
                if e.is_auth_error() {
                    info!("Stored credential rejected: {e}");
                } else {
                    warn!("Session check failed: {e}");
                }
                self.erase_credential();
                self.transition(SessionState::Unauthenticated);
            }
        }

        self.state()
    }

    /// Logs in, persists the credential and refreshes the identity.
    ///
    /// Errors propagate untouched so the login form can report them. A failed
    /// attempt leaves the session alone, except that a store still `Loading`
    /// settles to `Unauthenticated` when the credential could not be saved.
    pub async fn login(&self, username: &str, password: &str) -> SessionResult<Navigation> {
        let response = self.auth.login(username, password).await?;
        let credential = Credential::new(response.access_token)?;

        self.next_sequence();
        if let Err(e) = self.credentials.save(&credential) {
            self.settle_loading();
            return Err(e.into());
        }
        info!("Login succeeded for '{username}'");

        self.fetch_user().await;

        Ok(Navigation::to(&self.routes.dashboard))
    }

    /// Ends the session. Safe to call repeatedly.
    pub fn logout(&self) -> Navigation {
        self.next_sequence();
        self.erase_credential();
        self.transition(SessionState::Unauthenticated);
        info!("Logged out");

        Navigation::to(&self.routes.entry)
    }

    /// Re-reads the identity from the server after a profile edit.
    ///
    /// The partial is never merged locally; the server stays the only source
    /// of truth at the cost of one extra round trip.
    pub async fn update_profile(&self, partial: &ProfileUpdate) -> SessionState {
        debug!(
            "Profile updated ({} fields); refreshing identity",
            partial.changed_fields()
        );
        self.fetch_user().await
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// A login that could not persist its credential superseded any startup
    /// fetch, so nothing else will leave `Loading`.
    fn settle_loading(&self) {
        self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = SessionState::Unauthenticated;
            true
        });
    }

    fn stored_credential(&self) -> Option<Credential> {
        match self.credentials.load() {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Unable to read stored credential, treating as absent: {e}");
                None
            }
        }
    }

    fn erase_credential(&self) {
        if let Err(e) = self.credentials.clear() {
            error!("Failed to erase stored credential: {e}");
        }
    }

    fn transition(&self, next: SessionState) {
        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            debug!("Session {} -> {}", state.name(), next.name());
            *state = next;
            true
        });
    }
}
