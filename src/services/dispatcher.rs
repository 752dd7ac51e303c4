// src/services/dispatcher.rs

//! Query dispatcher.
//!
//! Owns the single [`SearchSession`] and drives it through
//! `Idle → Pending → Success | Error`. Every dispatch is tagged with a
//! generation number; a response is committed only if no newer request was
//! issued while it was in flight.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::models::{RawSearchHit, SearchSession, SessionState};
use crate::services::SearchProvider;

/// Queries shorter than this (after trimming) are ignored.
pub const MIN_QUERY_LEN: usize = 2;

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Query too short; session untouched, no request issued
    Skipped,
    /// Response committed to the session
    Committed,
    /// A newer request superseded this one; response discarded
    Stale,
}

/// Handle for an issued request, consumed by [`Dispatcher::complete`].
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
    query: String,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Issues search requests and owns the session state.
pub struct Dispatcher {
    provider: Arc<dyn SearchProvider>,
    session: Mutex<SearchSession>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            session: Mutex::new(SearchSession::new()),
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.lock().state().clone()
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    /// Submit a query and wait for its outcome.
    ///
    /// Overlapping calls are not rejected; whichever was issued last wins,
    /// regardless of the order in which responses arrive.
    pub async fn submit(&self, query: &str) -> Submission {
        let Some(ticket) = self.begin(query) else {
            return Submission::Skipped;
        };
        let result = self.provider.search(ticket.query()).await;
        self.complete(ticket, result)
    }

    /// Validate the query and enter `Pending`.
    ///
    /// Returns `None` for queries shorter than [`MIN_QUERY_LEN`].
    pub fn begin(&self, query: &str) -> Option<Ticket> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            log::debug!("Ignoring query {:?}: too short", query);
            return None;
        }

        let generation = self.lock().begin(query.to_string());
        log::info!("Dispatching search #{}: '{}'", generation, query);

        Some(Ticket {
            generation,
            query: query.to_string(),
        })
    }

    /// Commit a provider outcome for `ticket` unless it has been superseded.
    pub fn complete(&self, ticket: Ticket, result: Result<Vec<RawSearchHit>>) -> Submission {
        let Ticket { generation, query } = ticket;

        let next = match result {
            Ok(hits) => {
                log::info!("Search #{} returned {} hits", generation, hits.len());
                SessionState::Success { query, hits }
            }
            Err(e) => {
                log::warn!("Search #{} failed: {}", generation, e);
                SessionState::Error {
                    query,
                    reason: e.to_string(),
                }
            }
        };

        let mut session = self.lock();
        if session.commit(generation, next) {
            Submission::Committed
        } else {
            log::debug!(
                "Discarding stale response #{} (latest is #{})",
                generation,
                session.generation()
            );
            Submission::Stale
        }
    }

    fn lock(&self) -> MutexGuard<'_, SearchSession> {
        // The session is only mutated through complete transitions, so a
        // poisoned lock still guards a consistent state.
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}
