/// A fired search, stamped with the input generation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub generation: u64,
}
