pub mod candidate;
pub mod credential;
pub mod directory_kind;
pub mod identity;
pub mod profile_update;
pub mod role;
