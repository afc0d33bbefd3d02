//! CLI interface and argument parsing
//!
//! This module handles command-line interface parsing, help generation,
//! shell completion, and the subcommand handlers.

pub mod app;
pub mod commands;

// Re-export main types
pub use app::*;
