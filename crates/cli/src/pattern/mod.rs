// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Pattern normalization and validation.
//!
//! User-supplied include/exclude patterns arrive as one comma-joined string
//! or an ordered list; this module canonicalizes them into glob-like tokens
//! the traversal stage can match against.

pub mod defaults;
pub mod resolve;

pub use defaults::DEFAULT_IGNORE_PATTERNS;
pub use resolve::resolve_patterns;

use crate::error::{Error, Result};

/// Characters allowed in patterns beyond ASCII alphanumerics.
const ALLOWED_PUNCTUATION: &[char] = &['-', '_', '.', '/', '+', '*'];

/// User pattern input: one comma-joined string or an ordered list.
#[derive(Debug, Clone)]
pub enum PatternInput {
    Joined(String),
    List(Vec<String>),
}

impl PatternInput {
    /// True when there is nothing to parse.
    pub fn is_empty(&self) -> bool {
        match self {
            PatternInput::Joined(s) => s.is_empty(),
            PatternInput::List(items) => items.is_empty(),
        }
    }

    /// Collapse to the comma-joined form both variants share.
    fn joined(&self) -> String {
        match self {
            PatternInput::Joined(s) => s.clone(),
            PatternInput::List(items) => items.join(","),
        }
    }
}

impl From<&str> for PatternInput {
    fn from(s: &str) -> Self {
        PatternInput::Joined(s.to_string())
    }
}

impl From<Vec<String>> for PatternInput {
    fn from(items: Vec<String>) -> Self {
        PatternInput::List(items)
    }
}

/// Canonicalize one raw pattern.
///
/// Patterns are tree-relative: leading separators are stripped, and a
/// trailing separator means "everything under this directory". Case and
/// embedded wildcards pass through unchanged.
pub fn normalize_pattern(pattern: &str) -> String {
    let mut pattern = pattern.trim().trim_start_matches('/').to_string();
    if pattern.ends_with('/') {
        pattern.push('*');
    }
    pattern
}

/// Split, validate, and normalize a pattern input.
///
/// Fails fast on the first token containing a character outside the allowed
/// set; valid tokens come back normalized, in input order, duplicates kept.
pub fn parse_patterns(input: &PatternInput) -> Result<Vec<String>> {
    let joined = input.joined();
    let tokens: Vec<&str> = joined.split(',').collect();

    for token in &tokens {
        validate_token(token.trim())?;
    }

    Ok(tokens.iter().map(|t| normalize_pattern(t)).collect())
}

fn validate_token(token: &str) -> Result<()> {
    if token.chars().all(is_allowed) {
        Ok(())
    } else {
        Err(Error::InvalidPattern {
            token: token.to_string(),
        })
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(&c)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
