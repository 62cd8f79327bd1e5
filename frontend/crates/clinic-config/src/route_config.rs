use crate::{ConfigError, ConfigErrorResult, DEFAULT_DASHBOARD_ROUTE, DEFAULT_ENTRY_ROUTE};

use serde::Deserialize;

/// Navigation targets used by the session store and the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Login screen; unauthenticated visitors land here
    pub entry: String,
    /// Default authenticated landing page
    pub dashboard: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            entry: String::from(DEFAULT_ENTRY_ROUTE),
            dashboard: String::from(DEFAULT_DASHBOARD_ROUTE),
        }
    }
}

impl RouteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, route) in [("entry", &self.entry), ("dashboard", &self.dashboard)] {
            if !route.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "routes.{name} must start with '/', got '{route}'"
                )));
            }
        }

        if self.entry == self.dashboard {
            return Err(ConfigError::routes(
                "routes.entry and routes.dashboard must differ",
            ));
        }

        Ok(())
    }
}
