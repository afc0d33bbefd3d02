//! qrem - a natural-language front-end for an external reminders CLI
//!
//! qrem turns free text like "buy groceries tomorrow at 5pm" into structured
//! add/list/remove calls against a separately maintained reminder store
//! binary, extracting the date expression on the way in and matching fuzzily
//! on the way out.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod parse;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use error::{QremError, Result};

/// Current version of qrem
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
