use crate::{Capability, GateDecision, SessionState};

use clinic_config::RouteConfig;

use log::debug;
use tokio::sync::watch;

/// Decides render-vs-redirect for one session state and capability.
///
/// Unauthenticated visitors go to the entry route. Authenticated identities
/// lacking the role go to the dashboard instead, so "not logged in" and
/// "not allowed" stay distinguishable.
pub fn evaluate(
    state: &SessionState,
    capability: &Capability,
    routes: &RouteConfig,
) -> GateDecision {
    match state {
        SessionState::Loading => GateDecision::Pending,
        SessionState::Unauthenticated => GateDecision::Redirect(routes.entry.clone()),
        SessionState::Authenticated(identity) if !capability.admits(identity) => {
            debug!(
                "Role {} not admitted by {capability:?}; redirecting to {}",
                identity.role, routes.dashboard
            );
            GateDecision::Redirect(routes.dashboard.clone())
        }
        SessionState::Authenticated(_) => GateDecision::Render,
    }
}

/// A guard in front of a group of routes.
#[derive(Debug, Clone)]
pub struct AccessGate {
    capability: Capability,
    routes: RouteConfig,
}

impl AccessGate {
    pub fn new(capability: Capability, routes: RouteConfig) -> Self {
        Self { capability, routes }
    }

    pub fn authenticated(routes: RouteConfig) -> Self {
        Self::new(Capability::authenticated(), routes)
    }

    pub fn admin_only(routes: RouteConfig) -> Self {
        Self::new(Capability::admin_only(), routes)
    }

    pub fn doctor_only(routes: RouteConfig) -> Self {
        Self::new(Capability::doctor_only(), routes)
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    pub fn evaluate(&self, state: &SessionState) -> GateDecision {
        evaluate(state, &self.capability, &self.routes)
    }

    /// Waits out `Loading`, then decides.
    ///
    /// If the session store is dropped while still loading the gate reports
    /// `Pending`.
    pub async fn resolve(&self, session: &mut watch::Receiver<SessionState>) -> GateDecision {
        let settled = session
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());

        let state = match settled {
            Ok(state) => state,
            Err(_) => session.borrow().clone(),
        };
        self.evaluate(&state)
    }
}
