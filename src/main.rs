// certlint - Versioned compliance linting for PKI artifacts
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::{Context, Result};
use certlint::cli::InputKind;
use certlint::lint::install_panic_hook;
use certlint::output::{json, terminal};
use certlint::{Args, OutputFormat, ResultSet, global_registry, parser};
use clap::Parser;
use std::io::{self, Read, Write};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    // Lint panics are reported as Fatal results; keep them off stderr
    install_panic_hook();

    // Parse command line arguments
    let args = Args::parse();
    let config = args.engine_config().context("Failed to load engine configuration")?;

    let registry = global_registry()
        .filter(&config.filter_options())
        .context("Invalid lint selection")?;
    debug!("{} of {} lints selected", registry.len(), global_registry().len());

    // Handle --list-lints-json / --list-lints-source (list and exit)
    if args.lists_lints() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if args.output.list_lints_json {
            registry.write_json(&mut out)?;
        }
        if args.output.list_lints_source {
            for source in registry.sources() {
                writeln!(out, "{}", source)?;
            }
        }
        return Ok(());
    }

    let input = read_input(&args)?;
    let linter = config.linter(&registry)?;

    let format = args.input.format;
    let results: Option<ResultSet> = match args.input.kind {
        InputKind::Certificate => {
            let cert = parser::certificate_from_input(&input, format)
                .context("Failed to parse certificate")?;
            linter.lint_certificate(Some(&cert))
        }
        InputKind::Crl => {
            let crl = parser::revocation_list_from_input(&input, format)
                .context("Failed to parse revocation list")?;
            linter.lint_revocation_list(Some(&crl))
        }
        InputKind::Ocsp => {
            let response = parser::ocsp_response_from_input(&input, format)
                .context("Failed to parse OCSP response")?;
            linter.lint_ocsp_response(Some(&response))
        }
    };
    let results = results.context("No result set produced")?;

    info!(
        "Ran {} lints: errors={} warnings={} fatals={}",
        results.len(),
        results.errors_present,
        results.warnings_present,
        results.fatals_present
    );

    let output_format = if args.output.summary {
        OutputFormat::Terminal
    } else if args.output.pretty {
        OutputFormat::JSONPretty
    } else {
        OutputFormat::JSON
    };

    match output_format {
        OutputFormat::Terminal => terminal::print_summary(&results),
        OutputFormat::JSON => println!("{}", json::generate_json(&results, false)?),
        OutputFormat::JSONPretty => println!("{}", json::generate_json(&results, true)?),
    }

    Ok(())
}

/// Read the artifact from the named file or stdin
fn read_input(args: &Args) -> Result<Vec<u8>> {
    match &args.input.file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}
