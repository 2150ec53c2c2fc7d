pub mod cli;
pub mod error;
pub mod gitignore;
pub mod locator;
pub mod pattern;
pub mod query;

pub use cli::{Cli, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use locator::{Locator, SourceKind};
pub use pattern::{DEFAULT_IGNORE_PATTERNS, PatternInput};
pub use query::{IngestQuery, QueryOptions, RefKind, parse_query};

#[cfg(test)]
pub mod test_utils;
