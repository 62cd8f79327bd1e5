use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, RouteConfig, SearchConfig,
    SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "CLINIC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".clinic";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub routes: RouteConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CLINIC_CONFIG_DIR env var, else use ./.clinic/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CLINIC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CLINIC_CONFIG_DIR env var > ./.clinic/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.routes.validate()?;
        self.search.validate()?;

        Ok(())
    }

    /// Absolute path of the credential key-value file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.storage_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs the stored credential).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.base_url);
        info!(
            "  session: key={}, storage={}",
            self.session.credential_key, self.session.storage_file
        );
        info!(
            "  routes: entry={}, dashboard={}",
            self.routes.entry, self.routes.dashboard
        );
        info!(
            "  search: min_query_length={}, debounce={}ms",
            self.search.min_query_length, self.search.debounce_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("CLINIC_API_BASE_URL", &mut self.api.base_url);

        // Session
        Self::apply_env_string("CLINIC_CREDENTIAL_KEY", &mut self.session.credential_key);
        Self::apply_env_string("CLINIC_STORAGE_FILE", &mut self.session.storage_file);

        // Routes
        Self::apply_env_string("CLINIC_ENTRY_ROUTE", &mut self.routes.entry);
        Self::apply_env_string("CLINIC_DASHBOARD_ROUTE", &mut self.routes.dashboard);

        // Search
        Self::apply_env_parse(
            "CLINIC_SEARCH_MIN_QUERY_LENGTH",
            &mut self.search.min_query_length,
        );
        Self::apply_env_parse("CLINIC_SEARCH_DEBOUNCE_MS", &mut self.search.debounce_ms);

        // Logging
        Self::apply_env_parse("CLINIC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CLINIC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CLINIC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
