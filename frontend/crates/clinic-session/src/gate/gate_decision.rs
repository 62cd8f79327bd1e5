/// Outcome of evaluating an access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still loading; show a placeholder and decide later
    Pending,
    Render,
    Redirect(String),
}

impl GateDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            _ => None,
        }
    }
}
