// src/pipeline/normalize.rs

//! Field normalizer.
//!
//! Turns a filtered [`RawSearchHit`] into a [`ProfileRecord`]. Normalization
//! is total: every malformed or missing field degrades to a default, nothing
//! here returns an error or panics. Configuration problems (bad pattern,
//! unknown locale, bad date format) are rejected up front in
//! [`Normalizer::from_config`].

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{DisplayConfig, ProfileConfig, ProfileRecord, RawSearchHit};

/// Separator between the name and headline in provider titles.
const TITLE_DELIMITER: &str = " - ";

/// Maximum number of characters in derived initials.
const MAX_INITIALS: usize = 2;

/// Derives display-ready records from raw hits.
#[derive(Debug, Clone)]
pub struct Normalizer {
    suffixes: Vec<Regex>,
    default_job_title: String,
    locale: Locale,
    date_format: String,
}

impl Normalizer {
    /// Build a normalizer, compiling suffix patterns and resolving the locale.
    pub fn from_config(profile: &ProfileConfig, display: &DisplayConfig) -> Result<Self> {
        let suffixes = profile
            .strip_suffixes
            .iter()
            .map(|p| Regex::new(p).map_err(|e| AppError::regex(p, e)))
            .collect::<Result<Vec<_>>>()?;

        let locale = Locale::try_from(display.locale.as_str())
            .map_err(|_| AppError::config(format!("Unknown locale '{}'", display.locale)))?;

        if StrftimeItems::new(&display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::config(format!(
                "Invalid date format '{}'",
                display.date_format
            )));
        }

        Ok(Self {
            suffixes,
            default_job_title: profile.default_job_title.clone(),
            locale,
            date_format: display.date_format.clone(),
        })
    }

    /// Normalize a single hit.
    pub fn normalize(&self, hit: &RawSearchHit) -> ProfileRecord {
        let mut segments = hit.title.split(TITLE_DELIMITER);
        let first = segments.next().unwrap_or_default();
        let second = segments.next();

        let name = extract_name(first, &hit.author);
        let job_title = self.extract_job_title(second);
        let initials = initials(&name);
        let published_date = hit
            .published_date
            .as_deref()
            .and_then(parse_date)
            .and_then(|date| self.format_date(date));

        ProfileRecord {
            id: hit.id.clone(),
            url: hit.url.clone(),
            name,
            job_title,
            initials,
            published_date,
            image: hit.image.clone(),
        }
    }

    /// Normalize hits in order.
    pub fn normalize_all(&self, hits: &[RawSearchHit]) -> Vec<ProfileRecord> {
        hits.iter().map(|hit| self.normalize(hit)).collect()
    }

    fn extract_job_title(&self, segment: Option<&str>) -> String {
        segment
            .map(|s| {
                self.suffixes
                    .iter()
                    .fold(s.to_string(), |acc, re| re.replace(&acc, "").into_owned())
            })
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_job_title.clone())
    }

    fn format_date(&self, date: NaiveDate) -> Option<String> {
        let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
        let mut out = String::new();
        write!(
            out,
            "{}",
            midnight.format_localized(&self.date_format, self.locale)
        )
        .ok()?;
        Some(out)
    }
}

/// First title segment with the author removed, or the author itself.
fn extract_name(segment: &str, author: &str) -> String {
    let stripped = if author.is_empty() {
        segment.to_string()
    } else {
        segment.replace(author, "")
    };

    match stripped.trim() {
        "" => author.to_string(),
        name => name.to_string(),
    }
}

/// Uppercased first characters of the first words, at most two.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect()
}

/// Date-time layouts carrying a numeric offset (`+00:00` or `+0000`).
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// Date-time layouts without an offset; a trailing `Z` is stripped first.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date or date-time into a calendar date.
///
/// Accepts `T` or space separators, minute or second precision, and offsets
/// with or without a colon. The date is taken as written, not shifted to UTC.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date_naive());
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(naive, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::from_config(&ProfileConfig::default(), &DisplayConfig::default()).unwrap()
    }

    fn hit(title: &str, author: &str) -> RawSearchHit {
        RawSearchHit {
            id: "id-1".to_string(),
            title: title.to_string(),
            url: "https://www.linkedin.com/in/someone".to_string(),
            published_date: None,
            author: author.to_string(),
            image: None,
            favicon: None,
        }
    }

    #[test]
    fn test_name_falls_back_to_author() {
        let profile = ProfileConfig {
            strip_suffixes: vec![r"\s*\|\s*ExampleSite\s*$".to_string()],
            ..ProfileConfig::default()
        };
        let normalizer = Normalizer::from_config(&profile, &DisplayConfig::default()).unwrap();

        let record =
            normalizer.normalize(&hit("Jane Doe - Software Engineer | ExampleSite", "Jane Doe"));
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.job_title, "Software Engineer");
        assert_eq!(record.initials, "JD");
    }

    #[test]
    fn test_default_suffix_is_case_insensitive() {
        let n = normalizer();
        let a = n.normalize(&hit("Ana Lima - Data Scientist | LinkedIn", ""));
        let b = n.normalize(&hit("Ana Lima - Data Scientist | Linkedin", ""));
        assert_eq!(a.job_title, "Data Scientist");
        assert_eq!(b.job_title, "Data Scientist");
        assert_eq!(a.name, "Ana Lima");
    }

    #[test]
    fn test_name_without_author_match_is_kept() {
        let record = normalizer().normalize(&hit("Dr. Sam Park - CTO - Acme", "Someone Else"));
        assert_eq!(record.name, "Dr. Sam Park");
        assert_eq!(record.job_title, "CTO");
        assert_eq!(record.initials, "DS");
    }

    #[test]
    fn test_author_removed_from_name_segment() {
        let record = normalizer().normalize(&hit("Jane Doe, PhD - Researcher", "Jane Doe"));
        assert_eq!(record.name, ", PhD");
    }

    #[test]
    fn test_title_without_delimiter() {
        let record = normalizer().normalize(&hit("Maria Garcia", ""));
        assert_eq!(record.name, "Maria Garcia");
        assert_eq!(record.job_title, "Professional");
        assert_eq!(record.initials, "MG");
    }

    #[test]
    fn test_job_title_empty_after_strip_uses_default() {
        let record = normalizer().normalize(&hit("Lee Chen - | LinkedIn", ""));
        assert_eq!(record.job_title, "Professional");
    }

    #[test]
    fn test_everything_missing() {
        let record = normalizer().normalize(&hit("", ""));
        assert_eq!(record.name, "");
        assert_eq!(record.job_title, "Professional");
        assert_eq!(record.initials, "");
        assert_eq!(record.published_date, None);
    }

    #[test]
    fn test_initials_are_bounded_and_uppercased() {
        assert_eq!(initials("ada augusta king lovelace"), "AA");
        assert_eq!(initials("  émile   zola "), "ÉZ");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials("ß"), "SS");
        assert_eq!(initials(""), "");

        let record = normalizer().normalize(&hit("a b c d e - f", ""));
        assert!(record.initials.chars().count() <= MAX_INITIALS);
    }

    #[test]
    fn test_published_date_formats() {
        let n = normalizer();
        let mut h = hit("Jane - Dev", "");

        h.published_date = Some("2024-03-05T10:00:00.000Z".to_string());
        assert_eq!(n.normalize(&h).published_date.as_deref(), Some("Mar 5, 2024"));

        h.published_date = Some("2023-12-31".to_string());
        assert_eq!(n.normalize(&h).published_date.as_deref(), Some("Dec 31, 2023"));

        h.published_date = Some("2023-07-01T08:15:00".to_string());
        assert_eq!(n.normalize(&h).published_date.as_deref(), Some("Jul 1, 2023"));

        for raw in [
            "2024-03-05 10:00:00",
            "2024-03-05 10:00",
            "2024-03-05T10:00Z",
            "2024-03-05T10:00",
            "2024-03-05T10:00:00+0000",
            "2024-03-05T10:00:00.123-0500",
        ] {
            h.published_date = Some(raw.to_string());
            assert_eq!(
                n.normalize(&h).published_date.as_deref(),
                Some("Mar 5, 2024"),
                "input {raw}"
            );
        }
    }

    #[test]
    fn test_unparsable_date_is_omitted() {
        let n = normalizer();
        let mut h = hit("Jane - Dev", "");
        for raw in ["yesterday", "2024-13-40", "05/03/2024"] {
            h.published_date = Some(raw.to_string());
            assert_eq!(n.normalize(&h).published_date, None, "input {raw}");
        }
    }

    #[test]
    fn test_localized_date() {
        let display = DisplayConfig {
            locale: "de_DE".to_string(),
            date_format: "%-d. %B %Y".to_string(),
        };
        let n = Normalizer::from_config(&ProfileConfig::default(), &display).unwrap();
        let mut h = hit("Jane - Dev", "");
        h.published_date = Some("2024-03-05".to_string());
        assert_eq!(n.normalize(&h).published_date.as_deref(), Some("5. März 2024"));
    }

    #[test]
    fn test_from_config_rejects_bad_settings() {
        let profile = ProfileConfig {
            strip_suffixes: vec!["(unclosed".to_string()],
            ..ProfileConfig::default()
        };
        assert!(matches!(
            Normalizer::from_config(&profile, &DisplayConfig::default()),
            Err(AppError::Regex { .. })
        ));

        let display = DisplayConfig {
            locale: "xx_NOPE".to_string(),
            ..DisplayConfig::default()
        };
        assert!(matches!(
            Normalizer::from_config(&ProfileConfig::default(), &display),
            Err(AppError::Config(_))
        ));

        let display = DisplayConfig {
            date_format: "%Q".to_string(),
            ..DisplayConfig::default()
        };
        assert!(matches!(
            Normalizer::from_config(&ProfileConfig::default(), &display),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_normalize_all_keeps_order_and_fields() {
        let mut first = hit("A One - X", "");
        first.id = "1".to_string();
        first.image = Some("https://img.example.com/1.png".to_string());
        let mut second = hit("B Two - Y", "");
        second.id = "2".to_string();

        let records = normalizer().normalize_all(&[first, second]);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
        assert_eq!(records[0].image.as_deref(), Some("https://img.example.com/1.png"));
        assert_eq!(records[0].url, "https://www.linkedin.com/in/someone");
    }
}
