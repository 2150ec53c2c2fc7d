// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Locator parsing.
//!
//! Splits a source string into the fields that say where repository content
//! lives: user/repo/ref/subpath for remote URLs, an absolute directory path
//! for local trees. Pattern fields are filled in later by the resolver.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::query::RefKind;

/// Subdirectory of the system temp dir where remote content is materialized.
const TMP_SUBDIR: &str = "ingest";

/// Length of a full commit hash.
const COMMIT_HASH_LEN: usize = 40;

/// Whether a source string names a remote repository or a local directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Remote,
    Local,
}

impl SourceKind {
    /// Classify a source string when the caller did not say.
    pub fn detect(source: &str) -> Self {
        if source.starts_with("https://") || source.contains("github.com") {
            SourceKind::Remote
        } else {
            SourceKind::Local
        }
    }
}

/// Locator fields of a query, before pattern resolution fills the rest.
#[derive(Debug, Clone)]
pub struct Locator {
    pub user_name: Option<String>,
    pub repo_name: Option<String>,
    pub url: Option<String>,
    pub ref_kind: RefKind,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub subpath: String,
    pub local_path: PathBuf,
    pub slug: String,
    pub id: Uuid,
}

/// Tokenized remote URL: the domain plus the path segments after it.
///
/// Tokenizing validates the user/repo pair up front so the accessors never
/// index past the end of the segment list.
struct RemoteUrl<'a> {
    domain: &'a str,
    user: &'a str,
    repo: &'a str,
    /// Path segments after user/repo: ref marker, ref label, subpath.
    rest: Vec<&'a str>,
}

impl<'a> RemoteUrl<'a> {
    /// Tokenize a URL already normalized to the `https://` scheme.
    fn tokenize(url: &'a str, original: &str) -> Result<Self> {
        let rest = url.strip_prefix("https://").unwrap_or(url);
        let mut parts = rest.split('/');
        let domain = parts.next().unwrap_or_default();

        let (Some(user), Some(repo)) = (parts.next(), parts.next()) else {
            return Err(Error::InvalidLocator(original.to_string()));
        };
        if user.is_empty() || repo.is_empty() {
            return Err(Error::InvalidLocator(original.to_string()));
        }

        Ok(Self {
            domain,
            user,
            repo,
            rest: parts.collect(),
        })
    }

    /// Ref label (4th path segment); present only when a ref marker precedes it.
    fn ref_label(&self) -> Option<&'a str> {
        match self.rest.as_slice() {
            [_marker, label, ..] => Some(label),
            _ => None,
        }
    }

    /// Subtree restriction built from the 5th path segment on; `/` when absent.
    fn subpath(&self) -> String {
        match self.rest.as_slice() {
            [_marker, _label, tail @ ..] => format!("/{}", tail.join("/")),
            _ => "/".to_string(),
        }
    }
}

/// Parse a remote locator into its descriptor fields.
///
/// Only the first whitespace-separated token is the locator; callers may
/// paste a URL followed by trailing text. Any scheme is rewritten to
/// `https://`, added when absent.
pub fn parse_remote(source: &str) -> Result<Locator> {
    let token = match source.find(char::is_whitespace) {
        Some(idx) => &source[..idx],
        None => source,
    };
    let url = canonical_https(token);
    let parsed = RemoteUrl::tokenize(&url, source)?;

    let slug = format!("{}-{}", parsed.user, parsed.repo);
    let id = Uuid::new_v4();
    let local_path = tmp_root().join(id.to_string()).join(&slug);

    // Extra path segments never fold back into the canonical URL.
    let canonical = format!("https://{}/{}/{}", parsed.domain, parsed.user, parsed.repo);

    let (ref_kind, branch, commit) = match parsed.ref_label() {
        Some(label) if is_commit_hash(label) => (
            RefKind::Commit,
            Some(label.to_string()),
            Some(label.to_string()),
        ),
        Some(label) => (RefKind::Branch, Some(label.to_string()), None),
        None => (RefKind::None, None, None),
    };

    Ok(Locator {
        user_name: Some(parsed.user.to_string()),
        repo_name: Some(parsed.repo.to_string()),
        url: Some(canonical),
        ref_kind,
        branch,
        commit,
        subpath: parsed.subpath(),
        local_path,
        slug,
        id,
    })
}

/// Parse a local directory path into descriptor fields.
///
/// The path is absolutized lexically; it is not required to exist yet.
pub fn parse_local(source: &str) -> Result<Locator> {
    let local_path = std::path::absolute(source).map_err(|e| Error::Io {
        path: PathBuf::from(source),
        source: e,
    })?;

    let basename = path_name(&local_path);
    let parent = local_path.parent().map(path_name).unwrap_or_default();
    let slug = format!("{parent}/{basename}");

    Ok(Locator {
        user_name: None,
        repo_name: None,
        url: None,
        ref_kind: RefKind::None,
        branch: None,
        commit: None,
        subpath: "/".to_string(),
        local_path,
        slug,
        id: Uuid::new_v4(),
    })
}

/// Rewrite any scheme to `https://`, adding it when absent.
fn canonical_https(token: &str) -> String {
    let rest = match token.split_once("://") {
        Some((_scheme, rest)) => rest,
        None => token,
    };
    format!("https://{rest}")
}

/// 40 hex characters is treated as a full commit hash. A heuristic, not a
/// cryptographic check.
fn is_commit_hash(label: &str) -> bool {
    label.len() == COMMIT_HASH_LEN && label.chars().all(|c| c.is_ascii_hexdigit())
}

/// Fixed temporary-storage root for materialized remote content.
fn tmp_root() -> PathBuf {
    std::env::temp_dir().join(TMP_SUBDIR)
}

fn path_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
