mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod route_config;
mod search_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use route_config::RouteConfig;
pub use search_config::SearchConfig;
pub use session_config::SessionConfig;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";
const DEFAULT_CREDENTIAL_KEY: &str = "access_token";
const DEFAULT_STORAGE_FILE: &str = "storage.json";
const DEFAULT_ENTRY_ROUTE: &str = "/login";
const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
