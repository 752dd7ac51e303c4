//! Search hits as accepted from the provider.
//!
//! The provider payload is loosely typed. Every element of `results` is
//! checked here once; past this point a [`RawSearchHit`] is trusted as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};

/// A single hit returned by the search provider, validated at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchHit {
    /// Provider-assigned identifier (falls back to `url`)
    pub id: String,

    /// Page title, usually "Name - Headline | Site"
    pub title: String,

    /// Absolute URL of the hit
    pub url: String,

    /// Unparsed publication date, if the provider sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    /// Author as reported by the provider (may be empty)
    pub author: String,

    /// Absolute http(s) URL of a preview image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Absolute http(s) URL of the site favicon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// Shape of a hit on the wire: every field may be missing or of any type.
#[derive(Debug, Default, Deserialize)]
struct WireHit {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    url: Value,
    #[serde(default, rename = "publishedDate")]
    published_date: Value,
    #[serde(default)]
    author: Value,
    #[serde(default)]
    image: Value,
    #[serde(default)]
    favicon: Value,
}

/// Top-level provider response.
#[derive(Debug, Deserialize)]
struct WireResponse {
    results: Vec<Value>,
}

impl RawSearchHit {
    /// Validate a single JSON element from the provider.
    ///
    /// Returns `None` when the element is not an object or carries no usable
    /// `url`; every other defect is coerced.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let wire: WireHit = serde_json::from_value(value).ok()?;

        let url = non_empty_string(&wire.url)?;
        let id = non_empty_string(&wire.id).unwrap_or_else(|| url.clone());

        Some(Self {
            id,
            title: string_or_empty(&wire.title),
            url,
            published_date: non_empty_string(&wire.published_date),
            author: string_or_empty(&wire.author),
            image: http_url(&wire.image),
            favicon: http_url(&wire.favicon),
        })
    }
}

/// Decode a provider response body into validated hits.
///
/// A body that is not JSON or lacks a `results` array is an unusable
/// response. Individual bad elements are dropped; order is preserved.
pub fn parse_response(body: &[u8]) -> Result<Vec<RawSearchHit>> {
    let response: WireResponse = serde_json::from_slice(body)
        .map_err(|e| AppError::provider(format!("unusable response: {e}")))?;

    let total = response.results.len();
    let hits: Vec<RawSearchHit> = response
        .results
        .into_iter()
        .filter_map(RawSearchHit::from_value)
        .collect();

    if hits.len() < total {
        log::debug!(
            "Dropped {} of {} provider results without a usable url",
            total - hits.len(),
            total
        );
    }
    Ok(hits)
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn string_or_empty(value: &Value) -> String {
    value.as_str().map(str::to_string).unwrap_or_default()
}

fn http_url(value: &Value) -> Option<String> {
    let raw = non_empty_string(value)?;
    let parsed = Url::parse(&raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_hit() {
        let hit = RawSearchHit::from_value(json!({
            "id": "abc",
            "title": "Jane Doe - Engineer | LinkedIn",
            "url": "https://www.linkedin.com/in/jane",
            "publishedDate": "2024-03-05T00:00:00.000Z",
            "author": "Jane Doe",
            "image": "https://media.example.com/jane.jpg",
            "favicon": "https://www.linkedin.com/favicon.ico"
        }))
        .unwrap();

        assert_eq!(hit.id, "abc");
        assert_eq!(hit.author, "Jane Doe");
        assert_eq!(
            hit.published_date.as_deref(),
            Some("2024-03-05T00:00:00.000Z")
        );
        assert!(hit.image.is_some());
        assert!(hit.favicon.is_some());
    }

    #[test]
    fn test_from_value_coerces_malformed_fields() {
        let hit = RawSearchHit::from_value(json!({
            "title": 42,
            "url": "https://www.linkedin.com/in/x",
            "author": null,
            "publishedDate": "",
            "image": "not a url",
            "favicon": "ftp://example.com/icon.ico"
        }))
        .unwrap();

        assert_eq!(hit.id, "https://www.linkedin.com/in/x");
        assert_eq!(hit.title, "");
        assert_eq!(hit.author, "");
        assert_eq!(hit.published_date, None);
        assert_eq!(hit.image, None);
        assert_eq!(hit.favicon, None);
    }

    #[test]
    fn test_from_value_rejects_missing_url() {
        assert!(RawSearchHit::from_value(json!({"id": "1", "title": "t"})).is_none());
        assert!(RawSearchHit::from_value(json!({"url": 7})).is_none());
        assert!(RawSearchHit::from_value(json!("https://x.com/in/a")).is_none());
    }

    #[test]
    fn test_parse_response_drops_bad_elements_in_order() {
        let body = br#"{"results": [
            {"id": "1", "title": "A", "url": "https://x.com/in/a", "author": "A"},
            {"id": "2", "title": "B"},
            null,
            {"id": "3", "title": "C", "url": "https://x.com/in/c", "author": "C"}
        ]}"#;

        let hits = parse_response(body).unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_parse_response_rejects_unusable_body() {
        assert!(matches!(
            parse_response(b"<html>oops</html>"),
            Err(AppError::Provider(_))
        ));
        assert!(matches!(
            parse_response(br#"{"error": "quota"}"#),
            Err(AppError::Provider(_))
        ));
    }
}
