pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::candidate::Candidate;
pub use models::credential::Credential;
pub use models::directory_kind::DirectoryKind;
pub use models::identity::Identity;
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;
