//! Scraping the store's listing output
//!
//! The external program prints one reminder per line:
//! `<index>: <description> (in <relative time>)`, the annotation optional.
//! The format is owned by that program and unspecified, so unrecognized
//! lines are skipped rather than treated as errors.

use regex::Regex;
use std::sync::OnceLock;

/// One reminder scraped from the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Opaque token the store accepts for delete (the listing index)
    pub id: String,

    /// Reminder description
    pub text: String,

    /// Relative-time annotation, e.g. "in 2 hours"
    pub due_hint: Option<String>,
}

fn line_pattern() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| Regex::new(r"^(\d+): (.+?)(?: \((in .+)\))?$").unwrap())
}

/// Parse the full stdout of a `show` call into reminders.
pub fn parse_listing(output: &str) -> Vec<Reminder> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Reminder> {
    let caps = line_pattern().captures(line)?;
    Some(Reminder {
        id: caps[1].to_string(),
        text: caps[2].trim_end().to_string(),
        due_hint: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let reminders = parse_listing("0: Call mom\n");
        assert_eq!(
            reminders,
            vec![Reminder {
                id: "0".to_string(),
                text: "Call mom".to_string(),
                due_hint: None,
            }]
        );
    }

    #[test]
    fn test_line_with_time_annotation() {
        let reminders = parse_listing("3: Buy groceries (in 2 hours)\n");
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].id, "3");
        assert_eq!(reminders[0].text, "Buy groceries");
        assert_eq!(reminders[0].due_hint.as_deref(), Some("in 2 hours"));
    }

    #[test]
    fn test_parenthetical_in_description_is_kept() {
        let reminders = parse_listing("0: Call Bob (work) (in 10 minutes)\n");
        assert_eq!(reminders[0].text, "Call Bob (work)");
        assert_eq!(reminders[0].due_hint.as_deref(), Some("in 10 minutes"));
    }

    #[test]
    fn test_trailing_parenthetical_without_hint_stays_in_text() {
        let reminders = parse_listing("0: Call Bob (work)\n");
        assert_eq!(reminders[0].text, "Call Bob (work)");
        assert_eq!(reminders[0].due_hint, None);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let output = "Reminders for list Sooner:\n0: Call mom\nnot a reminder\n";
        let reminders = parse_listing(output);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].text, "Call mom");
    }

    #[test]
    fn test_empty_output_yields_no_reminders() {
        assert!(parse_listing("").is_empty());
    }
}
