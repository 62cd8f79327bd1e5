use clinic_core::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one candidate; picking closes the list
    Single,
    /// Ordered set of distinct candidates; the list stays open
    Multi,
}

/// What the widget hands to its `on_select` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Candidate),
    Multi(Vec<Candidate>),
}
