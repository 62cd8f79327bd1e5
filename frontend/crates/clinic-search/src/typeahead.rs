use crate::{RemoteSearch, SearchQuery, Selection, SelectionMode, TypeaheadConfig, TypeaheadState};

use clinic_client::ClientResult;
use clinic_core::Candidate;

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

/// Callback receiving the selection after every change.
pub type OnSelect = Box<dyn Fn(Selection) + Send + Sync>;

/// Search-and-pick engine behind one picker widget.
///
/// Debounce works on a logical clock: every input change bumps the
/// generation, and after the quiet period an input only fires if it still
/// holds the newest generation. Each fired search is stamped with its
/// `SearchQuery`, and a response is applied only while that stamp is still the
/// most recently fired one. Superseded requests are never cancelled on the
/// wire; their answers are just dropped.
pub struct Typeahead {
    remote: Arc<dyn RemoteSearch>,
    config: TypeaheadConfig,
    mode: SelectionMode,
    on_select: OnSelect,
    state: watch::Sender<TypeaheadState>,
}

impl Typeahead {
    pub fn new(
        remote: Arc<dyn RemoteSearch>,
        config: TypeaheadConfig,
        mode: SelectionMode,
        on_select: OnSelect,
    ) -> Self {
        let (state, _) = watch::channel(TypeaheadState::default());
        Self {
            remote,
            config,
            mode,
            on_select,
            state,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    pub fn subscribe(&self) -> watch::Receiver<TypeaheadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> TypeaheadState {
        self.state.borrow().clone()
    }

    pub fn results(&self) -> Vec<Candidate> {
        self.state.borrow().results.clone()
    }

    pub fn selection(&self) -> Vec<Candidate> {
        self.state.borrow().selection.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    /// Handles one change of the query text.
    ///
    /// Resolves once this input has either been superseded, dismissed as too
    /// short, or had its search answered. The host runs one of these per
    /// keystroke without awaiting the previous one.
    pub async fn input(&self, text: impl Into<String>) {
        let text = text.into();
        let query = text.trim().to_string();
        let too_short = query.chars().count() < self.config.min_query_length;

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = state.begin_input(text);
            if too_short {
                state.clear_results();
            }
        });

        if too_short {
            debug!("Query '{query}' below {} chars; results cleared", self.config.min_query_length);
            return;
        }

        tokio::time::sleep(self.config.debounce).await;

        if self.state.borrow().generation != generation {
            debug!("Query '{query}' superseded during debounce");
            return;
        }

        let stamp = SearchQuery { text: query, generation };
        self.state.send_modify(|state| {
            state.latest_fired = Some(stamp.clone());
            state.loading = true;
        });

        let outcome = self.remote.search(&stamp.text).await;
        self.apply(stamp, outcome);
    }

    /// Applies a search answer if its query is still the newest fired one.
    fn apply(&self, stamp: SearchQuery, outcome: ClientResult<Vec<Candidate>>) {
        self.state.send_if_modified(|state| {
            if state.latest_fired.as_ref() != Some(&stamp) {
                debug!(
                    "Discarding stale answer for '{}' (generation {})",
                    stamp.text, stamp.generation
                );
                return false;
            }

            state.loading = false;
            match outcome {
                Ok(results) => {
                    debug!("{} results for '{}'", results.len(), stamp.text);
                    state.results = results;
                    state.open = true;
                }
                Err(e) => {
                    warn!("Directory search for '{}' failed: {e}", stamp.text);
                    state.results.clear();
                }
            }
            true
        });
    }

    /// Picks a candidate.
    ///
    /// Returns false when nothing changed (a duplicate in Multi mode).
    pub fn select(&self, candidate: Candidate) -> bool {
        let mode = self.mode;
        let mut picked = None;

        self.state.send_if_modified(|state| {
            match mode {
                SelectionMode::Single => {
                    picked = Some(Selection::Single(candidate.clone()));
                    state.selection = vec![candidate];
                    state.open = false;
                }
                SelectionMode::Multi => {
                    if state.selection.iter().any(|c| c.id == candidate.id) {
                        return false;
                    }
                    state.selection.push(candidate);
                    picked = Some(Selection::Multi(state.selection.clone()));
                }
            }

            state.begin_input(String::new());
            state.clear_results();
            true
        });

        match picked {
            Some(selection) => {
                (self.on_select)(selection);
                true
            }
            None => {
                debug!("Candidate already selected; ignoring");
                false
            }
        }
    }

    /// Drops a candidate from a multi-selection.
    ///
    /// No-op in Single mode or when the id is not selected.
    pub fn remove(&self, id: &str) -> bool {
        if self.mode != SelectionMode::Multi {
            debug!("remove() ignored in single-select mode");
            return false;
        }

        let mut remaining = None;
        self.state.send_if_modified(|state| {
            let Some(index) = state.selection.iter().position(|c| c.id == id) else {
                return false;
            };
            state.selection.remove(index);
            remaining = Some(state.selection.clone());
            true
        });

        match remaining {
            Some(selection) => {
                (self.on_select)(Selection::Multi(selection));
                true
            }
            None => false,
        }
    }

    /// The host saw an interaction outside the widget.
    pub fn dismiss(&self) {
        self.state.send_if_modified(|state| {
            let was_open = state.open;
            state.open = false;
            was_open
        });
    }

    /// The widget regained focus; reopen if there is something to show.
    pub fn focus(&self) {
        self.state.send_if_modified(|state| {
            if state.open || state.results.is_empty() {
                return false;
            }
            state.open = true;
            true
        });
    }

    /// Clears query, results and selection, e.g. after the form is submitted.
    ///
    /// Pending inputs and in-flight searches are invalidated. `on_select` is
    /// not called.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            state.begin_input(String::new());
            state.clear_results();
            state.selection.clear();
            state.open = false;
        });
    }
}
