// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Repository `.gitignore` reading.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read ignore patterns from a `.gitignore` file, in file order.
///
/// A missing file is the common case and yields an empty set, not an error.
/// Blank lines and `#` comments are skipped. A line naming an existing
/// directory (relative to the ignore file's location) gets exactly one
/// trailing `/` so directory-only matches stay unambiguous.
pub fn read_gitignore(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut patterns = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if base.join(line).is_dir() {
            patterns.push(format!("{}/", line.trim_end_matches('/')));
        } else {
            patterns.push(line.to_string());
        }
    }
    Ok(patterns)
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
