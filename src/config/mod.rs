//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of the optional qrem.yml
//! configuration file.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
