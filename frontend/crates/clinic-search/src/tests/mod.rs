mod directory;

use crate::{OnSelect, RemoteSearch, Selection, SelectionMode, Typeahead, TypeaheadConfig};

use clinic_client::{ClientError, ClientResult};
use clinic_core::Candidate;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub(crate) fn candidate(id: &str, name: &str) -> Candidate {
    Candidate::new(id, name)
}

/// Remote search with per-query latency and canned answers.
///
/// Unscripted queries answer immediately with no results.
#[derive(Default)]
pub(crate) struct ScriptedSearch {
    script: Mutex<HashMap<String, (Duration, Option<Vec<Candidate>>)>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, query: &str, delay: Duration, results: Vec<Candidate>) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), (delay, Some(results)));
        self
    }

    pub(crate) fn fail(self, query: &str, delay: Duration) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert(query.to_string(), (delay, None));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteSearch for ScriptedSearch {
    async fn search(&self, query: &str) -> ClientResult<Vec<Candidate>> {
        self.calls.lock().unwrap().push(query.to_string());
        let scripted = self.script.lock().unwrap().get(query).cloned();

        let (delay, answer) = scripted.unwrap_or((Duration::ZERO, Some(Vec::new())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        answer.ok_or_else(|| ClientError::api_error(503, "UNAVAILABLE", "directory offline"))
    }
}

/// Collects every selection handed to `on_select`.
#[derive(Clone, Default)]
pub(crate) struct SelectionLog(Arc<Mutex<Vec<Selection>>>);

impl SelectionLog {
    pub(crate) fn callback(&self) -> OnSelect {
        let log = self.0.clone();
        Box::new(move |selection| log.lock().unwrap().push(selection))
    }

    pub(crate) fn entries(&self) -> Vec<Selection> {
        self.0.lock().unwrap().clone()
    }
}

pub(crate) fn engine(
    remote: Arc<ScriptedSearch>,
    mode: SelectionMode,
    log: &SelectionLog,
) -> Arc<Typeahead> {
    Arc::new(Typeahead::new(
        remote,
        TypeaheadConfig::default(),
        mode,
        log.callback(),
    ))
}

/// Starts an input the way a keystroke handler would, without awaiting it.
pub(crate) fn type_text(engine: &Arc<Typeahead>, text: &str) -> tokio::task::JoinHandle<()> {
    let engine = engine.clone();
    let text = text.to_string();
    tokio::spawn(async move { engine.input(text).await })
}
