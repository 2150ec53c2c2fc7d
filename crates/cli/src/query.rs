// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Query descriptor and resolution.
//!
//! `parse_query` is the single entry point: it dispatches locator parsing on
//! an explicit or detected remote/local discriminator, resolves the effective
//! pattern set, and hands back the finished descriptor by value.

use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::locator::{self, SourceKind};
use crate::pattern::{PatternInput, resolve_patterns};

/// How the locator referenced a point in repository history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    /// No ref segment in the locator.
    #[default]
    None,
    /// The locator carried a ref label, treated as a branch name.
    Branch,
    /// The ref label was a 40-character hex string, treated as a commit.
    Commit,
}

/// Normalized description of one ingestion request.
///
/// Built once per request and consumed by the traversal/digest stage; nothing
/// mutates it after construction.
#[derive(Debug, Clone, Serialize)]
pub struct IngestQuery {
    /// Account or organization segment of a remote locator.
    pub user_name: Option<String>,

    /// Repository segment of a remote locator.
    pub repo_name: Option<String>,

    /// Canonical `https://<domain>/<user>/<repo>` form, without ref/subpath.
    pub url: Option<String>,

    /// Whether the locator named a branch, a commit, or neither.
    pub ref_kind: RefKind,

    /// Ref label from the locator (branch name or candidate commit string).
    pub branch: Option<String>,

    /// Full commit hash, set when the ref label is exactly 40 hex characters.
    pub commit: Option<String>,

    /// Subtree restriction for traversal; `/` means the whole tree.
    pub subpath: String,

    /// Where content resides (local) or will be materialized (remote).
    pub local_path: PathBuf,

    /// Human-readable identifier used for default naming, not lookups.
    pub slug: String,

    /// Opaque identifier generated once per query.
    pub id: Uuid,

    /// Caller-supplied file-size ceiling in bytes, passed through unvalidated.
    pub max_file_size: u64,

    /// Final ordered exclusion set: defaults, gitignore, then user ignores,
    /// minus patterns exactly equal to a user include.
    pub ignore_patterns: Vec<String>,

    /// Normalized user inclusion patterns, or `None` when none were given.
    pub include_patterns: Option<Vec<String>>,
}

/// Caller-supplied knobs for query resolution.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Force the remote/local discriminator instead of detecting it.
    pub kind: Option<SourceKind>,

    /// File-size ceiling in bytes for the digest stage.
    pub max_file_size: u64,

    /// Extra exclusion patterns, comma-joined or listed.
    pub ignore: Option<PatternInput>,

    /// Inclusion patterns that override exactly-equal exclusions.
    pub include: Option<PatternInput>,
}

/// Resolve a source string into a finished [`IngestQuery`].
pub fn parse_query(source: &str, opts: &QueryOptions) -> Result<IngestQuery> {
    let kind = opts.kind.unwrap_or_else(|| SourceKind::detect(source));
    let loc = match kind {
        SourceKind::Remote => locator::parse_remote(source)?,
        SourceKind::Local => locator::parse_local(source)?,
    };

    let (ignore_patterns, include_patterns) =
        resolve_patterns(&loc.local_path, opts.ignore.as_ref(), opts.include.as_ref())?;

    tracing::debug!(slug = %loc.slug, count = ignore_patterns.len(), "applied ignore patterns");
    for pattern in &ignore_patterns {
        tracing::trace!(%pattern, "ignore");
    }
    if let Some(patterns) = &include_patterns {
        for pattern in patterns {
            tracing::trace!(%pattern, "include");
        }
    }

    Ok(IngestQuery {
        user_name: loc.user_name,
        repo_name: loc.repo_name,
        url: loc.url,
        ref_kind: loc.ref_kind,
        branch: loc.branch,
        commit: loc.commit,
        subpath: loc.subpath,
        local_path: loc.local_path,
        slug: loc.slug,
        id: loc.id,
        max_file_size: opts.max_file_size,
        ignore_patterns,
        include_patterns,
    })
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
