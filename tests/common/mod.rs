//! Common test utilities
//!
//! The external reminder store is stubbed with small shell scripts. Every
//! stub appends its argv to `calls.log` so tests can assert on the exact
//! invocations the binary made.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable stub store that records adds and replays them as
/// numbered lines on `show`.
pub fn write_recording_stub(dir: &Path) -> PathBuf {
    let state = dir.join("state.txt");
    let log = dir.join("calls.log");
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
case "$1" in
  show)
    if [ -f "{state}" ]; then
      i=0
      while IFS= read -r line; do
        echo "$i: $line"
        i=$((i + 1))
      done < "{state}"
    fi
    ;;
  add)
    echo "$3" >> "{state}"
    ;;
esac
"#,
        log = log.display(),
        state = state.display()
    );

    write_executable(dir, script)
}

/// Write an executable stub store that prints a fixed listing on `show`.
pub fn write_fixed_stub(dir: &Path, lines: &[&str]) -> PathBuf {
    let log = dir.join("calls.log");
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
if [ "$1" = "show" ]; then
  cat <<'LISTING'
{listing}
LISTING
fi
"#,
        log = log.display(),
        listing = lines.join("\n")
    );

    write_executable(dir, script)
}

/// Everything the stub was invoked with, one line per call.
pub fn read_calls(dir: &Path) -> String {
    fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
}

fn write_executable(dir: &Path, script: String) -> PathBuf {
    let path = dir.join("reminders-stub");
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
