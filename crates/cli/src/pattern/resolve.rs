// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Effective pattern-set resolution.
//!
//! Merges four ordered sources into the final ignore/include pair: built-in
//! defaults, repository `.gitignore` content, user ignores, user includes.
//! A single deterministic pass; the only removal is the exact-match include
//! override at the end.

use std::path::Path;

use crate::error::Result;
use crate::gitignore::read_gitignore;
use crate::pattern::{DEFAULT_IGNORE_PATTERNS, PatternInput, parse_patterns};

/// Resolve the effective `(ignore, include)` pattern pair for a query.
pub fn resolve_patterns(
    local_path: &Path,
    ignore: Option<&PatternInput>,
    include: Option<&PatternInput>,
) -> Result<(Vec<String>, Option<Vec<String>>)> {
    let mut ignore_patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
        .iter()
        .map(|p| (*p).to_string())
        .collect();

    let gitignore_path = local_path.join(".gitignore");
    let from_gitignore = read_gitignore(&gitignore_path)?;
    if !from_gitignore.is_empty() {
        tracing::debug!(
            path = %gitignore_path.display(),
            count = from_gitignore.len(),
            "loaded .gitignore patterns"
        );
    }
    ignore_patterns.extend(from_gitignore);

    if let Some(input) = ignore.filter(|i| !i.is_empty()) {
        ignore_patterns.extend(parse_patterns(input)?);
    }

    let include_patterns = match include.filter(|i| !i.is_empty()) {
        Some(input) => {
            let includes = parse_patterns(input)?;
            // Exact string equality only: an include that merely overlaps an
            // ignore glob leaves it in place.
            ignore_patterns.retain(|p| !includes.contains(p));
            Some(includes)
        }
        None => None,
    };

    Ok((ignore_patterns, include_patterns))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
