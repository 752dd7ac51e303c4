// src/utils/display.rs

//! Console output for the CLI.
//!
//! Diagnostics go through the `log` facade; this module prints the
//! user-facing result view with consistent timestamps and layout.

use chrono::Local;

use crate::models::ProfileRecord;

/// Placeholder shown in place of empty initials.
const INITIALS_PLACEHOLDER: &str = "??";

fn stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Print a header block.
pub fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(60));
    println!("  {}", title);
    println!("{}", "═".repeat(60));
}

/// Print a separator line.
pub fn separator() {
    println!("{}", "─".repeat(60));
}

/// Print an indented line.
pub fn sub_item(message: &str) {
    println!("    {}", message);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("[{}] ✓ {}", stamp(), message);
}

/// Print a failure line.
pub fn failure(message: &str) {
    eprintln!("[{}] ✗ {}", stamp(), message);
}

/// Print a summary section.
pub fn summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("[{}] [SUMMARY] {}", stamp(), title);
    for (key, value) in items {
        println!("    {}: {}", key, value);
    }
}

/// Render one profile as a short text card.
pub fn profile_card(record: &ProfileRecord, path_segment: &str) -> Vec<String> {
    let initials = if record.initials.is_empty() {
        INITIALS_PLACEHOLDER
    } else {
        &record.initials
    };

    let mut lines = vec![
        format!("[{}] {}", initials, record.name),
        format!("     {}", record.job_title),
        format!("     ↗ {}", record.profile_slug(path_segment)),
    ];
    if let Some(date) = &record.published_date {
        lines.push(format!("     📅 {}", date));
    }
    lines
}

/// Print every profile card separated by rules.
pub fn profiles(records: &[ProfileRecord], path_segment: &str) {
    for record in records {
        separator();
        for line in profile_card(record, path_segment) {
            println!("{}", line);
        }
    }
    separator();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(initials: &str, date: Option<&str>) -> ProfileRecord {
        ProfileRecord {
            id: "1".into(),
            url: "https://www.linkedin.com/in/jane-doe".into(),
            name: "Jane Doe".into(),
            job_title: "Engineer".into(),
            initials: initials.into(),
            published_date: date.map(str::to_string),
            image: None,
        }
    }

    #[test]
    fn test_profile_card_lines() {
        let lines = profile_card(&record("JD", Some("Mar 5, 2024")), "/in/");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "[JD] Jane Doe");
        assert!(lines[2].ends_with("jane-doe"));
    }

    #[test]
    fn test_profile_card_uses_placeholder_for_empty_initials() {
        let lines = profile_card(&record("", None), "/in/");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[??]"));
    }
}
