use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Typeahead constraints
pub const MIN_MIN_QUERY_LENGTH: usize = 1;
pub const MAX_MIN_QUERY_LENGTH: usize = 32;
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

pub const MAX_DEBOUNCE_MS: u64 = 5000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Typeahead search tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this never reach the directory
    pub min_query_length: usize,
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_query_length < MIN_MIN_QUERY_LENGTH
            || self.min_query_length > MAX_MIN_QUERY_LENGTH
        {
            return Err(ConfigError::search(format!(
                "search.min_query_length must be {}-{}, got {}",
                MIN_MIN_QUERY_LENGTH, MAX_MIN_QUERY_LENGTH, self.min_query_length
            )));
        }

        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::search(format!(
                "search.debounce_ms must be 0-{}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }

        Ok(())
    }
}
