//! Core configuration types
//!
//! This module defines the data structure that represents a qrem.yml
//! configuration file. Every field has a default, so the file itself is
//! optional.

use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// External reminder store binary
    #[serde(default = "default_store")]
    pub store: String,

    /// Reminder list to operate on
    #[serde(default = "default_list")]
    pub list: String,

    /// Acceptance threshold for fuzzy removal, in (0, 1]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Title used when date extraction strips the whole input
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_store() -> String {
    "reminders".to_string()
}

fn default_list() -> String {
    "Sooner".to_string()
}

fn default_threshold() -> f64 {
    0.5
}

fn default_placeholder() -> String {
    "Reminder".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: default_store(),
            list: default_list(),
            threshold: default_threshold(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Apply store/list overrides (from QREM_STORE and QREM_LIST) on top of
    /// the file-based configuration.
    pub fn with_overrides(mut self, store: Option<String>, list: Option<String>) -> Self {
        if let Some(store) = store {
            self.store = store;
        }
        if let Some(list) = list {
            self.list = list;
        }
        self
    }
}
