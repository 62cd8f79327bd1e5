use crate::{ConfigError, ConfigErrorResult, DEFAULT_CREDENTIAL_KEY, DEFAULT_STORAGE_FILE};

use serde::Deserialize;

/// Where the session credential is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key under which the bearer credential is stored
    pub credential_key: String,
    /// Key-value storage file, relative to the config directory
    pub storage_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            credential_key: String::from(DEFAULT_CREDENTIAL_KEY),
            storage_file: String::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.credential_key.trim().is_empty() {
            return Err(ConfigError::session("session.credential_key cannot be empty"));
        }

        let path = std::path::Path::new(&self.storage_file);
        if self.storage_file.is_empty() || path.is_absolute() || self.storage_file.contains("..")
        {
            return Err(ConfigError::session(
                "session.storage_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
