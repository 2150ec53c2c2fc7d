// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

use super::*;
use yare::parameterized;

#[test]
fn invalid_locator_display() {
    let err = Error::InvalidLocator("github.com".into());
    assert_eq!(err.to_string(), "invalid repository source: 'github.com'");
}

#[test]
fn invalid_pattern_names_the_token() {
    let err = Error::InvalidPattern {
        token: "ba!d".into(),
    };
    let message = err.to_string();
    assert!(message.contains("'ba!d'"));
    assert!(message.contains("asterisk"));
}

#[test]
fn io_error_includes_path() {
    let err = Error::Io {
        path: PathBuf::from(".gitignore"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains(".gitignore"));
}

#[parameterized(
    locator = { Error::InvalidLocator("x".into()), ExitCode::InvalidInput },
    pattern = { Error::InvalidPattern { token: "x".into() }, ExitCode::InvalidInput },
    io = { Error::Io { path: PathBuf::from("p"), source: std::io::Error::other("boom") }, ExitCode::InternalError },
)]
fn maps_to_exit_codes(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
