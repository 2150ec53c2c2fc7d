// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Ingest Contributors

//! Ingest CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ingest::cli::{Cli, OutputFormat};
use ingest::error::ExitCode;
use ingest::query::{self, IngestQuery};

fn init_logging() {
    let filter = EnvFilter::try_from_env("INGEST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ingest: {}", e);
            match e.downcast_ref::<ingest::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let query = query::parse_query(&cli.source, &cli.query_options())?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&query)?),
        OutputFormat::Text => print_text(&query),
    }

    Ok(ExitCode::Success)
}

fn print_text(query: &IngestQuery) {
    println!("slug:       {}", query.slug);
    if let Some(url) = &query.url {
        println!("url:        {url}");
    }
    if let Some(branch) = &query.branch {
        println!("branch:     {branch}");
    }
    if let Some(commit) = &query.commit {
        println!("commit:     {commit}");
    }
    println!("subpath:    {}", query.subpath);
    println!("local path: {}", query.local_path.display());
    println!("max size:   {} bytes", query.max_file_size);
    println!("ignore:     {} patterns", query.ignore_patterns.len());
    match &query.include_patterns {
        Some(patterns) => println!("include:    {}", patterns.join(", ")),
        None => println!("include:    none"),
    }
}
