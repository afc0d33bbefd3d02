//! Subprocess calls into the external reminder store
//!
//! Every query and mutation is a single blocking invocation of the store
//! binary. The store's stderr always reaches the user unchanged; stdout is
//! captured for `show` and suppressed for `add`.

use crate::error::{StoreError, StoreResult};
use crate::store::listing::{parse_listing, Reminder};
use std::process::{Command, Stdio};

/// Client for the external reminder store
pub struct StoreClient {
    bin: String,
    list: String,
}

impl StoreClient {
    /// Create a client for a store binary and list name
    pub fn new(bin: impl Into<String>, list: impl Into<String>) -> Self {
        StoreClient {
            bin: bin.into(),
            list: list.into(),
        }
    }

    /// Raw `show` output with stdout captured
    pub fn show(&self) -> StoreResult<String> {
        let output = Command::new(&self.bin)
            .args(["show", &self.list])
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| StoreError::Launch {
                bin: self.bin.clone(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StoreError::Failed {
                bin: self.bin.clone(),
                code: output.status.code(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| StoreError::Output(e.to_string()))
    }

    /// All reminders currently on the list
    pub fn reminders(&self) -> StoreResult<Vec<Reminder>> {
        Ok(parse_listing(&self.show()?))
    }

    /// Add a reminder, optionally with a `%Y-%m-%d %H:%M:%S` due argument
    pub fn add(&self, title: &str, due: Option<&str>) -> StoreResult<()> {
        let mut command = Command::new(&self.bin);
        command.args(["add", &self.list, title]);
        if let Some(datetime) = due {
            command.args(["-d", datetime]);
        }
        self.run(command, true)
    }

    /// Delete a reminder by the id scraped from the listing
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut command = Command::new(&self.bin);
        command.args(["delete", &self.list, id]);
        self.run(command, false)
    }

    /// Run a mutating store call, checking the exit status
    fn run(&self, mut command: Command, quiet: bool) -> StoreResult<()> {
        if quiet {
            command.stdout(Stdio::null());
        } else {
            command.stdout(Stdio::inherit());
        }

        let status = command
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| StoreError::Launch {
                bin: self.bin.clone(),
                error: e.to_string(),
            })?;

        if !status.success() {
            return Err(StoreError::Failed {
                bin: self.bin.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_captures_stdout() {
        // `echo show <list>` stands in for the store
        let client = StoreClient::new("echo", "Sooner");
        let output = client.show().unwrap();
        assert_eq!(output.trim(), "show Sooner");
    }

    #[test]
    fn test_missing_binary_is_a_launch_error() {
        let client = StoreClient::new("qrem-no-such-binary", "Sooner");
        let result = client.show();
        assert!(matches!(result, Err(StoreError::Launch { .. })));
    }

    #[test]
    fn test_nonzero_exit_is_a_failure() {
        // `false` ignores its arguments and exits 1
        let client = StoreClient::new("false", "Sooner");
        let result = client.show();
        assert!(matches!(
            result,
            Err(StoreError::Failed { code: Some(1), .. })
        ));
    }

    #[test]
    fn test_add_with_successful_binary() {
        let client = StoreClient::new("true", "Sooner");
        assert!(client.add("Buy groceries", None).is_ok());
        assert!(client.add("Buy groceries", Some("2099-12-31 17:00:00")).is_ok());
    }

    #[test]
    fn test_delete_with_failing_binary() {
        let client = StoreClient::new("false", "Sooner");
        assert!(client.delete("0").is_err());
    }
}
