// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! CLI argument parsing with clap derive.

use clap::{Parser, ValueEnum};

use crate::locator::SourceKind;
use crate::pattern::PatternInput;
use crate::query::QueryOptions;

/// Default file-size ceiling: 10 MiB.
const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Turn a repository URL or local path into a normalized digest query
#[derive(Parser)]
#[command(name = "ingest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository URL or local directory path
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Treat the source as a remote repository URL
    #[arg(long)]
    pub remote: bool,

    /// Treat the source as a local directory
    #[arg(long, conflicts_with = "remote")]
    pub local: bool,

    /// Comma-separated patterns to exclude from the digest
    #[arg(short = 'e', long = "exclude", value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Comma-separated patterns that override exactly-equal exclusions
    #[arg(short = 'i', long = "include", value_name = "PATTERNS")]
    pub include: Option<String>,

    /// Maximum file size in bytes passed to the digest stage
    #[arg(short = 's', long = "max-size", default_value_t = DEFAULT_MAX_FILE_SIZE, value_name = "BYTES")]
    pub max_size: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Explicit remote/local override, if either flag was given.
    pub fn source_kind(&self) -> Option<SourceKind> {
        if self.remote {
            Some(SourceKind::Remote)
        } else if self.local {
            Some(SourceKind::Local)
        } else {
            None
        }
    }

    /// Build resolution options from the parsed arguments.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            kind: self.source_kind(),
            max_file_size: self.max_size,
            ignore: self.exclude.as_deref().map(PatternInput::from),
            include: self.include.as_deref().map(PatternInput::from),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
