use clinic_config::SearchConfig;

use std::time::Duration;

const DEFAULT_MIN_QUERY_LENGTH: usize = 2;
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadConfig {
    /// Shorter queries clear the results without a remote call
    pub min_query_length: usize,
    /// Quiet period after the last keystroke before the search fires
    pub debounce: Duration,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl From<&SearchConfig> for TypeaheadConfig {
    fn from(config: &SearchConfig) -> Self {
        Self {
            min_query_length: config.min_query_length,
            debounce: config.debounce(),
        }
    }
}
