// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::config::EngineConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod filter_args;
mod input_args;
mod output_args;

// Re-export sub-structs
pub use filter_args::FilterArgs;
pub use input_args::{InputArgs, InputKind};
pub use output_args::OutputArgs;

/// certlint - Compliance linting for X.509 certificates, CRLs and OCSP responses
///
/// Arguments are grouped into domain sub-structs composed with #[command(flatten)]:
/// - Artifact input (InputArgs)
/// - Lint selection (FilterArgs)
/// - Output and listing (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, long_about = None)]
#[command(name = "certlint")]
#[command(about = "Versioned compliance linting for X.509 certificates, CRLs and OCSP responses")]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    // ============ Engine Settings ============
    /// Engine configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Evaluate lints one at a time instead of in parallel
    #[arg(long = "sequential", conflicts_with = "threads")]
    pub sequential: bool,

    /// Size of the worker pool used for parallel evaluation
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,
}

impl Args {
    /// Load the configuration file, if any, and apply command line overrides
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        self.filter.apply(&mut config.filter);

        if self.sequential {
            config.execution.parallel = false;
        }
        if let Some(threads) = self.threads {
            config.execution.parallel = true;
            config.execution.worker_threads = Some(threads);
        }

        Ok(config)
    }

    /// Whether the run only lists lints instead of linting an artifact
    pub fn lists_lints(&self) -> bool {
        self.output.list_lints_json || self.output.list_lints_source
    }
}
