use crate::db::Database;
use crate::errors::ServerError;
use crate::suggest::Suggestion;
use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex};

/// The last successful station query. Replaced wholesale by the next query;
/// never merged.
pub struct SuggestionSet {
    pub items: Vec<Suggestion>,
    pub fetched_at: DateTime<Local>,
}

/// What survives between page loads: the suggestion list the user is
/// working from, or the banner of the query that failed to produce one.
#[derive(Default)]
pub struct SessionState {
    pub suggestions: Option<SuggestionSet>,
    pub error: Option<String>,
}

/// Everything a request handler needs, passed in explicitly. Cloning is
/// cheap and shares the session.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    session: Arc<Mutex<SessionState>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            session: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Lock the session for the closure. Astra handlers run on a worker
    /// pool, so access goes through a mutex even though the app is a
    /// one-person tool.
    pub fn with_session<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut SessionState) -> T,
    {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| ServerError::InternalError)?;
        Ok(f(&mut guard))
    }
}
