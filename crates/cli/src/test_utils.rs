//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temp directory standing in for a resolved clone.
pub fn temp_repo() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes a `.gitignore` with the given content into `dir`.
pub fn write_gitignore(dir: &Path, content: &str) {
    fs::write(dir.join(".gitignore"), content).unwrap();
}
