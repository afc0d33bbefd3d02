//! Subcommand handlers
//!
//! Each handler performs at most one listing call and one mutating call
//! against the store, then prints what happened.

use crate::config::Config;
use crate::error::Result;
use crate::parse::date;
use crate::parse::fuzzy::{self, Selection};
use crate::store::StoreClient;
use crate::ui;
use chrono::Local;
use clap::ArgMatches;
use clap_complete::{generate, Shell};
use std::io;

/// Due argument format understood by the store binary
const STORE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `list`: print every reminder on the list
pub fn list(client: &StoreClient) -> Result<()> {
    for reminder in client.reminders()? {
        println!("{}", ui::reminder_line(&reminder));
    }
    Ok(())
}

/// `add`: extract a date from the text and hand both to the store
pub fn add(client: &StoreClient, config: &Config, text: &str) -> Result<()> {
    let extraction = date::extract(text, Local::now(), &config.placeholder);

    match extraction.due {
        Some(when) => {
            let datetime = when.format(STORE_DATETIME_FORMAT).to_string();
            client.add(&extraction.title, Some(&datetime))?;
        }
        None => client.add(&extraction.title, None)?,
    }

    println!("{}", ui::added_line(&extraction.title, extraction.due));
    Ok(())
}

/// `remove`: resolve the target by index or similarity, then delete it.
///
/// An empty list, an out-of-range index, and a below-threshold best match
/// are reported outcomes, not errors.
pub fn remove(client: &StoreClient, config: &Config, target: &str) -> Result<()> {
    let reminders = client.reminders()?;
    if reminders.is_empty() {
        println!("No reminders found");
        return Ok(());
    }

    let texts: Vec<&str> = reminders.iter().map(|r| r.text.as_str()).collect();

    match fuzzy::select(target, &texts, config.threshold) {
        Selection::Position(index) => {
            client.delete(&reminders[index].id)?;
        }
        Selection::OutOfRange(index) => {
            println!(
                "Invalid index: {}. Valid range is 0-{}",
                index,
                reminders.len() - 1
            );
        }
        Selection::Similar { index, score } => {
            println!("{}", ui::removed_line(&reminders[index].text, score));
            client.delete(&reminders[index].id)?;
        }
        Selection::NoMatch { .. } => {
            println!("{}", ui::no_match_line(target, config.threshold));
        }
    }
    Ok(())
}

/// `completions`: write completions for the given shell to stdout
pub fn completions(command: &mut clap::Command, matches: &ArgMatches) -> Result<()> {
    if let Some(shell) = matches.get_one::<Shell>("shell").copied() {
        generate(shell, command, "qrem", &mut io::stdout());
    }
    Ok(())
}
