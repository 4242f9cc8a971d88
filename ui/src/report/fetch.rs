//! Load/error/success lifecycle for one report request.
//!
//! Each mounted report view owns one [`ReportFetch`]. Navigating to another
//! session restarts the lifecycle; a response that lands after that is
//! discarded rather than applied (in-flight requests are not cancelled, their
//! results are simply ignored once superseded).

/// Presentation state of a report view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(T),
}

/// Identifies one issued request. Resolving with an outdated token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    session_id: u64,
    generation: u64,
}

impl RequestToken {
    pub fn session_id(&self) -> u64 {
        self.session_id
    }
}

/// State machine owning the fetch lifecycle for a single view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFetch<T> {
    session_id: u64,
    generation: u64,
    state: FetchState<T>,
}

impl<T> ReportFetch<T> {
    /// A fresh controller starts out loading the given session.
    pub fn new(session_id: u64) -> Self {
        Self {
            session_id,
            generation: 0,
            state: FetchState::Loading,
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start (or restart) loading for a session. Returns the token the
    /// eventual response must present to be applied.
    pub fn begin(&mut self, session_id: u64) -> RequestToken {
        self.session_id = session_id;
        self.generation += 1;
        self.state = FetchState::Loading;
        RequestToken {
            session_id,
            generation: self.generation,
        }
    }

    /// Apply a finished request. Returns `false` when the token was
    /// superseded by a newer `begin` and the result was dropped.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if token.generation != self.generation || token.session_id != self.session_id {
            log::debug!(
                "discarding stale response for session {} (viewing {})",
                token.session_id,
                self.session_id
            );
            return false;
        }
        self.state = match result {
            Ok(payload) => FetchState::Ready(payload),
            Err(reason) => FetchState::Error(reason),
        };
        true
    }
}
