// src/pipeline/filter.rs

//! Profile URL filter.

use crate::models::{ProfileConfig, RawSearchHit};

/// Keeps hits whose URL contains the target profile path.
#[derive(Debug, Clone)]
pub struct ProfileFilter {
    pattern: String,
}

impl ProfileFilter {
    /// Create a filter for a literal URL substring (e.g., "linkedin.com/in/").
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new(config.url_pattern())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, hit: &RawSearchHit) -> bool {
        hit.url.contains(&self.pattern)
    }

    /// Stable subsequence of `hits` that match. Non-matching hits are dropped silently.
    pub fn filter(&self, hits: &[RawSearchHit]) -> Vec<RawSearchHit> {
        hits.iter().filter(|hit| self.matches(hit)).cloned().collect()
    }
}
