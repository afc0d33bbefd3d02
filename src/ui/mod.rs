//! Colored terminal output
//!
//! Formatting lives in pure functions so the exact strings are testable.
//! The `colored` crate drops the escapes itself when stdout is not a tty or
//! NO_COLOR is set.

use crate::store::Reminder;
use chrono::{DateTime, Local};
use colored::Colorize;

/// Timestamp format echoed back after a successful date extraction
const PARSED_AS_FORMAT: &str = "%a %b %-d %H:%M:%S";

/// One listing line: `[0] Buy groceries (in 2 hours)`
pub fn reminder_line(reminder: &Reminder) -> String {
    let mut line = format!(
        "{}{}{} {}",
        "[".dimmed(),
        reminder.id.yellow(),
        "]".dimmed(),
        reminder.text
    );

    if let Some(hint) = &reminder.due_hint {
        line.push_str(&format!(
            " {}{}{}",
            "(".dimmed(),
            hint.blue(),
            ")".dimmed()
        ));
    }
    line
}

/// Confirmation for an added reminder, echoing the parsed instant when a
/// date was extracted
pub fn added_line(title: &str, due: Option<DateTime<Local>>) -> String {
    let mut line = format!("Added '{}'", title.green());
    if let Some(when) = due {
        line.push_str(&format!(
            " {}parsed as: {}{}",
            "(".dimmed(),
            when.format(PARSED_AS_FORMAT).to_string().blue(),
            ")".dimmed()
        ));
    }
    line
}

/// Confirmation for a fuzzy removal, echoing the similarity
pub fn removed_line(text: &str, score: f64) -> String {
    format!(
        "Removing reminder: {} ({:.0}% match)",
        text.green(),
        score * 100.0
    )
}

/// Message when the best fuzzy score falls under the acceptance threshold
pub fn no_match_line(query: &str, threshold: f64) -> String {
    format!(
        "No reminder found matching '{}' with at least {:.0}% similarity",
        query,
        threshold * 100.0
    )
}
