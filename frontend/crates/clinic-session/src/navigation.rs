/// Instruction to the host router to move to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
}

impl Navigation {
    pub fn to(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
