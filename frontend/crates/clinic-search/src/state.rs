use crate::SearchQuery;

use clinic_core::Candidate;

/// Everything one typeahead instance knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeaheadState {
    pub(crate) query: String,
    pub(crate) generation: u64,
    pub(crate) latest_fired: Option<SearchQuery>,
    pub(crate) results: Vec<Candidate>,
    pub(crate) open: bool,
    pub(crate) loading: bool,
    pub(crate) selection: Vec<Candidate>,
}

impl TypeaheadState {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Bumped on every input change, selection-driven clears included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn latest_fired(&self) -> Option<&SearchQuery> {
        self.latest_fired.as_ref()
    }

    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// A search has fired and its answer has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> &[Candidate] {
        &self.selection
    }

    /// Records an input change and returns its generation.
    pub(crate) fn begin_input(&mut self, text: String) -> u64 {
        self.generation += 1;
        self.query = text;
        self.generation
    }

    /// Drops results and forgets any in-flight search.
    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
        self.latest_fired = None;
        self.loading = false;
    }
}
