//! Search session state machine.

use super::RawSearchHit;

/// Lifecycle of the current search.
///
/// ```text
/// Idle ──submit──▶ Pending ──resolve──▶ Success
///                     │  ◀──submit──────┘   │
///                     └──reject──▶ Error ◀──┘ (via Pending)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A provider request is outstanding
    Pending { query: String },
    /// The latest request resolved
    Success {
        query: String,
        hits: Vec<RawSearchHit>,
    },
    /// The latest request failed; `reason` is kept for logs only
    Error { query: String, reason: String },
}

impl SessionState {
    /// Message shown to the user for any provider failure.
    pub const FAILURE_MESSAGE: &'static str =
        "Error searching external sources. Please try again.";

    /// Query associated with the current state, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            SessionState::Idle => None,
            SessionState::Pending { query }
            | SessionState::Success { query, .. }
            | SessionState::Error { query, .. } => Some(query),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending { .. })
    }
}

/// The single mutable session owned by the dispatcher.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Generation of the most recently issued request (0 = none).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter `Pending` for a new request and return its generation.
    pub fn begin(&mut self, query: String) -> u64 {
        self.generation += 1;
        self.state = SessionState::Pending { query };
        self.generation
    }

    /// Commit an outcome if it belongs to the latest request.
    ///
    /// Returns `false` (leaving the state untouched) for stale generations.
    pub fn commit(&mut self, generation: u64, state: SessionState) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = state;
        true
    }
}
