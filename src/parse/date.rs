//! Natural-language date extraction
//!
//! Locates a date/time expression in free text, resolves it against a
//! reference instant, and strips the matched span from the text. Timestamps
//! that do not land strictly in the future are discarded, so incidental
//! numbers are never misread as past dates.

use chrono::{DateTime, Local};
use chrono_english::{parse_date_string, Dialect};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Result of date extraction: an optional due instant and the text with the
/// date expression removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Absolute due instant, when a future date expression was found
    pub due: Option<DateTime<Local>>,
    /// Input text with the matched span stripped
    pub title: String,
}

/// Date-expression patterns recognized inside larger text, tried in order.
/// Compiled case-insensitively.
const DATE_PATTERNS: &[&str] = &[
    r"tomorrow at \d{1,2}(?::\d{2})? ?(?:am|pm)?",
    r"today at \d{1,2}(?::\d{2})? ?(?:am|pm)?",
    r"next (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
    r"next week",
    r"next month",
    r"\d{1,2}(?:st|nd|rd|th)? of (?:january|february|march|april|may|june|july|august|september|october|november|december)",
    r"(?:january|february|march|april|may|june|july|august|september|october|november|december) \d{1,2}(?:st|nd|rd|th)?",
    r"\d{4}-\d{2}-\d{2}(?: \d{1,2}:\d{2})?",
    r"\d{1,2}/\d{1,2}(?:/\d{2,4})?",
    r"in \d+ (?:minute|hour|day|week|month|year)s?",
];

fn pattern_set() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        DATE_PATTERNS
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
            .collect()
    })
}

/// Extract a date expression from `text` relative to `now`.
///
/// The whole text is tried first; a full-text date keeps the text unchanged
/// as the title. Otherwise the first pattern span that resolves strictly
/// into the future is removed from the title, with `placeholder` substituted
/// if nothing remains. Text without a usable date comes back verbatim.
pub fn extract(text: &str, now: DateTime<Local>, placeholder: &str) -> Extraction {
    if let Some(when) = parse_natural(text, now) {
        if when > now {
            return Extraction {
                due: Some(when),
                title: text.to_string(),
            };
        }
    }

    if let Some((range, when)) = find_date_span(text, now) {
        return Extraction {
            due: Some(when),
            title: strip_span(text, range, placeholder),
        };
    }

    Extraction {
        due: None,
        title: text.to_string(),
    }
}

/// Locate the first pattern span that parses to a future instant.
fn find_date_span(text: &str, now: DateTime<Local>) -> Option<(Range<usize>, DateTime<Local>)> {
    for re in pattern_set() {
        let Some(m) = re.find(text) else { continue };
        if let Some(when) = parse_natural(m.as_str(), now) {
            if when > now {
                return Some((m.range(), when));
            }
        }
    }
    None
}

/// Parse a natural-language date expression relative to `now`.
///
/// The parser's grammar joins a date and a time by whitespace, so a span
/// that fails verbatim is retried with the connective "at" removed
/// ("tomorrow at 5pm" -> "tomorrow 5pm").
fn parse_natural(s: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(when) = parse_date_string(s, now, Dialect::Us) {
        return Some(when);
    }

    let without_at = s.to_lowercase().replace(" at ", " ");
    if without_at == s.to_lowercase() {
        return None;
    }
    parse_date_string(&without_at, now, Dialect::Us).ok()
}

/// Remove `range` from `text`, trimming the seam and collapsing the double
/// space the removal leaves behind.
fn strip_span(text: &str, range: Range<usize>, placeholder: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    cleaned.push_str(&text[..range.start]);
    cleaned.push_str(&text[range.end..]);

    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        placeholder.to_string()
    } else {
        cleaned
    }
}
