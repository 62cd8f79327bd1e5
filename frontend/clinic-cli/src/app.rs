use crate::{CliError, CliResult};

use clinic_client::Client;
use clinic_config::Config;
use clinic_core::DirectoryKind;
use clinic_search::{DirectorySearch, SelectionMode, Typeahead, TypeaheadConfig};
use clinic_session::{
    AccessGate, CredentialStore, FileKeyValueStore, KeyValueStore, SessionState, SessionStore,
};

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;
use log::{debug, info};
use serde_json::{Value, json};

/// Route group a `gate` command checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateTarget {
    /// Any signed-in user
    Any,
    /// Super and hospital admins
    Admin,
    /// Doctors only
    Doctor,
}

/// Directory a `search` command queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTarget {
    Doctor,
    Nurse,
    User,
}

impl From<SearchTarget> for DirectoryKind {
    fn from(target: SearchTarget) -> Self {
        match target {
            SearchTarget::Doctor => DirectoryKind::StaffDoctor,
            SearchTarget::Nurse => DirectoryKind::StaffNurse,
            SearchTarget::User => DirectoryKind::User,
        }
    }
}

/// One wired-up front-end core, the way a UI shell would hold it.
pub struct App {
    client: Arc<Client>,
    session: SessionStore,
    search: TypeaheadConfig,
}

impl App {
    /// Build from loaded config; `server` overrides `api.base_url`.
    pub fn from_config(config: &Config, server: Option<&str>) -> CliResult<Self> {
        let storage_path = config.storage_path()?;
        let base_url = server.unwrap_or(&config.api.base_url);

        Ok(Self::new(config, base_url, storage_path))
    }

    pub fn new(config: &Config, base_url: &str, storage_path: PathBuf) -> Self {
        debug!(
            "Using API {base_url}, credential file {}",
            storage_path.display()
        );

        let client = Arc::new(Client::new(base_url));
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(storage_path));
        let credentials = CredentialStore::new(store, config.session.credential_key.clone());
        let session = SessionStore::new(client.clone(), credentials, config.routes.clone());

        Self {
            client,
            session,
            search: TypeaheadConfig::from(&config.search),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn login(&self, username: &str, password: &str) -> CliResult<Value> {
        let navigation = self.session.login(username, password).await?;

        Ok(json!({
            "navigate": navigation.path,
            "session": session_json(&self.session.state()),
        }))
    }

    pub fn logout(&self) -> Value {
        let navigation = self.session.logout();

        json!({
            "navigate": navigation.path,
            "session": session_json(&self.session.state()),
        })
    }

    pub async fn whoami(&self) -> Value {
        let state = self.session.fetch_user().await;
        session_json(&state)
    }

    pub async fn gate(&self, target: GateTarget) -> Value {
        let routes = self.session.routes().clone();
        let gate = match target {
            GateTarget::Any => AccessGate::authenticated(routes),
            GateTarget::Admin => AccessGate::admin_only(routes),
            GateTarget::Doctor => AccessGate::doctor_only(routes),
        };

        let state = self.session.fetch_user().await;
        let decision = gate.evaluate(&state);
        info!("Gate {target:?}: {decision:?}");

        let outcome = match (decision.is_render(), decision.redirect_target()) {
            (true, _) => "render",
            (false, Some(_)) => "redirect",
            (false, None) => "pending",
        };

        json!({
            "decision": outcome,
            "redirect": decision.redirect_target(),
            "session": session_json(&state),
        })
    }

    /// Replays `keystrokes` into a single-select picker and reports what it
    /// ends up showing.
    ///
    /// Each keystroke is handed over as soon as the previous one has been
    /// registered, so they all land inside one debounce window.
    pub async fn search(&self, target: SearchTarget, keystrokes: &[String]) -> CliResult<Value> {
        let kind = DirectoryKind::from(target);
        let remote = Arc::new(DirectorySearch::new(
            self.client.clone(),
            kind,
            self.session.credential(),
        ));
        let typeahead = Arc::new(Typeahead::new(
            remote,
            self.search,
            SelectionMode::Single,
            Box::new(|_| {}),
        ));

        let mut updates = typeahead.subscribe();
        let mut pending = Vec::with_capacity(keystrokes.len());

        for keystroke in keystrokes {
            let registered = typeahead.state().generation() + 1;
            let engine = typeahead.clone();
            let text = keystroke.clone();
            pending.push(tokio::spawn(async move { engine.input(text).await }));

            updates
                .wait_for(|state| state.generation() >= registered)
                .await
                .map(|_| ())
                .map_err(|e| CliError::task(e.to_string()))?;
        }

        for handle in pending {
            handle.await.map_err(|e| CliError::task(e.to_string()))?;
        }

        let state = typeahead.state();
        Ok(json!({
            "directory": kind.as_str(),
            "query": state.query(),
            "results": state.results(),
        }))
    }
}

fn session_json(state: &SessionState) -> Value {
    json!({
        "state": state.name(),
        "identity": state.identity(),
    })
}
