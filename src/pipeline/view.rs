// src/pipeline/view.rs

//! What the user should currently see, derived from a session snapshot.

use crate::error::{AppError, Result};
use crate::models::{ProfileRecord, SessionState};

use super::{Normalizer, ProfileFilter};

/// Display state computed from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing submitted yet
    Idle,
    /// Waiting for the provider
    Loading,
    /// The provider failed; carries the user-facing message
    Failed(&'static str),
    /// Search succeeded but no hit matched the profile pattern
    NoMatches,
    /// Normalized profiles in provider order
    Profiles(Vec<ProfileRecord>),
}

impl ResultsView {
    /// Run filter and normalizer over the session's hits.
    pub fn derive(state: &SessionState, filter: &ProfileFilter, normalizer: &Normalizer) -> Self {
        match state {
            SessionState::Idle => ResultsView::Idle,
            SessionState::Pending { .. } => ResultsView::Loading,
            SessionState::Error { .. } => ResultsView::Failed(SessionState::FAILURE_MESSAGE),
            SessionState::Success { hits, .. } => {
                let records = normalizer.normalize_all(&filter.filter(hits));
                if records.is_empty() {
                    ResultsView::NoMatches
                } else {
                    ResultsView::Profiles(records)
                }
            }
        }
    }

    /// Records available for display or export (empty unless `Profiles`).
    pub fn records(&self) -> &[ProfileRecord] {
        match self {
            ResultsView::Profiles(records) => records,
            _ => &[],
        }
    }

    /// `Err(AppError::Provider)` for a failed search, `Ok` otherwise.
    pub fn check(&self) -> Result<()> {
        match self {
            ResultsView::Failed(message) => Err(AppError::provider(message)),
            _ => Ok(()),
        }
    }
}
