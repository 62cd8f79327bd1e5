//! Session state, credential persistence and role-based access gating for
//! the clinic front end.

pub mod credential_store;
pub mod error;
pub mod gate;
pub mod navigation;
pub mod session_state;
pub mod session_store;
pub mod storage;

pub use credential_store::CredentialStore;
pub use error::{Result as SessionResult, SessionError, StoreError, StoreResult};
pub use gate::access_gate::{AccessGate, evaluate};
pub use gate::capability::Capability;
pub use gate::gate_decision::GateDecision;
pub use gate::nav_item::{NavItem, visible_items};
pub use navigation::Navigation;
pub use session_state::SessionState;
pub use session_store::SessionStore;
pub use storage::KeyValueStore;
pub use storage::file_store::FileKeyValueStore;
pub use storage::memory_store::MemoryKeyValueStore;

#[cfg(test)]
mod tests;
