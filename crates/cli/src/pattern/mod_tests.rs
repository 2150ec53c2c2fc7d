// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    plain = { "src", "src" },
    leading_sep = { "/vendor", "vendor" },
    trailing_sep = { "build/", "build/*" },
    whitespace = { "  *.log  ", "*.log" },
    wildcard_kept = { "src/**/*.rs", "src/**/*.rs" },
    case_kept = { "README.MD", "README.MD" },
    extension_glob = { "*.tar.gz", "*.tar.gz" },
)]
fn normalizes(raw: &str, expected: &str) {
    assert_eq!(normalize_pattern(raw), expected);
}

#[test]
fn splits_comma_joined_input() {
    let parsed = parse_patterns(&PatternInput::from("*.rs, src/, /docs")).unwrap();
    assert_eq!(parsed, vec!["*.rs", "src/*", "docs"]);
}

#[test]
fn joins_list_input() {
    let input = PatternInput::from(vec!["*.rs".to_string(), "build/".to_string()]);
    assert_eq!(parse_patterns(&input).unwrap(), vec!["*.rs", "build/*"]);
}

#[test]
fn duplicates_are_preserved() {
    let parsed = parse_patterns(&PatternInput::from("*.rs,*.rs")).unwrap();
    assert_eq!(parsed, vec!["*.rs", "*.rs"]);
}

#[test]
fn rejects_disallowed_characters() {
    let err = parse_patterns(&PatternInput::from("*.rs,ba!d,x y")).unwrap_err();
    match err {
        Error::InvalidPattern { token } => assert_eq!(token, "ba!d"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_fails_before_any_normalization() {
    // Fail-fast: no partial set comes back.
    assert!(parse_patterns(&PatternInput::from("ok,n@pe")).is_err());
}

#[test]
fn empty_input_reports_empty() {
    assert!(PatternInput::from("").is_empty());
    assert!(PatternInput::from(Vec::new()).is_empty());
    assert!(!PatternInput::from("*.rs").is_empty());
}

proptest! {
    #[test]
    fn normalize_is_idempotent(p in "\\PC{0,40}") {
        let once = normalize_pattern(&p);
        prop_assert_eq!(normalize_pattern(&once), once);
    }

    #[test]
    fn allowed_charset_always_validates(p in "[A-Za-z0-9\\-_./+*]{0,32}") {
        prop_assert!(parse_patterns(&PatternInput::from(p.as_str())).is_ok());
    }
}
