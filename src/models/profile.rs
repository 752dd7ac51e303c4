//! Normalized profile record.

use serde::{Deserialize, Serialize};

/// A display-ready profile derived from a [`RawSearchHit`](super::RawSearchHit).
///
/// Records are recomputed from the session on every change and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Identifier carried over from the hit
    pub id: String,

    /// Profile URL; always contains the target profile path
    pub url: String,

    /// Person's name
    pub name: String,

    /// Headline, or the configured default
    pub job_title: String,

    /// Up to two uppercase initials (may be empty)
    pub initials: String,

    /// Locale-formatted publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProfileRecord {
    /// Short handle following the profile path segment.
    ///
    /// `https://www.linkedin.com/in/jane-doe/` with segment `/in/` yields
    /// `jane-doe`. Returns the whole URL when the segment is absent.
    pub fn profile_slug(&self, path_segment: &str) -> &str {
        match self.url.find(path_segment) {
            Some(idx) if !path_segment.is_empty() => {
                self.url[idx + path_segment.len()..].trim_end_matches('/')
            }
            _ => &self.url,
        }
    }
}
