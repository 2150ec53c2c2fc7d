// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Built-in default ignore patterns.
//!
//! Process-wide immutable configuration data: build artifacts, dependency
//! directories, VCS metadata, caches, and binary/media extensions that a
//! digest should never include.

pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Python
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "__pycache__",
    ".pytest_cache",
    ".coverage",
    ".tox",
    ".nox",
    ".mypy_cache",
    ".ruff_cache",
    ".hypothesis",
    "poetry.lock",
    "Pipfile.lock",
    // JavaScript/Node
    "node_modules",
    "bower_components",
    "package-lock.json",
    "yarn.lock",
    ".npm",
    ".yarn",
    ".pnpm-store",
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".gitignore",
    ".gitattributes",
    ".gitmodules",
    // Images and media
    "*.svg",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.ico",
    "*.pdf",
    "*.mov",
    "*.mp4",
    "*.mp3",
    "*.wav",
    // Virtual environments
    "venv",
    ".venv",
    "env",
    ".env",
    "virtualenv",
    // IDEs and editors
    ".idea",
    ".vscode",
    ".vs",
    "*.swp",
    "*.swo",
    "*.swn",
    ".settings",
    ".project",
    ".classpath",
    "*.sublime-*",
    // Temporary and cache files
    "*.log",
    "*.bak",
    "*.tmp",
    "*.temp",
    ".cache",
    ".sass-cache",
    ".eslintcache",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    // Build directories and artifacts
    "build",
    "dist",
    "target",
    "out",
    "*.egg-info",
    "*.egg",
    "*.whl",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.class",
    // Documentation build output
    "site-packages",
    ".docusaurus",
    ".next",
    ".nuxt",
    // Minified files and source maps
    "*.min.js",
    "*.min.css",
    "*.map",
    // Terraform
    ".terraform",
    "*.tfstate*",
    // Vendored dependencies in various languages
    "vendor/",
];

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
