//! Debounced, race-safe typeahead over the clinic directories.
//!
//! One `Typeahead` backs one picker widget: it turns keystrokes into at most
//! one directory call per typing pause, keeps only the answer to the newest
//! fired query, and maintains the single- or multi-select result.

pub mod config;
pub mod remote;
pub mod search_query;
pub mod selection;
pub mod state;
pub mod typeahead;

pub use config::TypeaheadConfig;
pub use remote::{DirectorySearch, RemoteSearch};
pub use search_query::SearchQuery;
pub use selection::{Selection, SelectionMode};
pub use state::TypeaheadState;
pub use typeahead::{OnSelect, Typeahead};

#[cfg(test)]
mod tests;
