use clinic_core::Identity;

/// Lifecycle of the current session. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state until the first `fetch_user` settles
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}
