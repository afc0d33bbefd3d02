//! The external reminder store boundary
//!
//! The store is a separately maintained program that owns reminder
//! persistence. This module invokes it as a subprocess and scrapes its
//! line-oriented listing output.

pub mod client;
pub mod listing;

// Re-export main types
pub use client::*;
pub use listing::*;
