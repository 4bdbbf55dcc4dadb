// certlint - Versioned compliance linting for PKI artifacts
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! certlint evaluates X.509 certificates, revocation lists and OCSP responses
//! against a catalog of compliance lints drawn from the CA/Browser Forum, ETSI
//! and IETF requirements. Every lint carries an effective window, and each run
//! yields a versioned, timestamped result set keyed by lint name.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod lints;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::config::EngineConfig;
pub use crate::engine::{
    Linter, RESULT_SCHEMA_VERSION, ResultSet, lint_certificate, lint_certificate_ex,
    lint_ocsp_response, lint_ocsp_response_ex, lint_revocation_list, lint_revocation_list_ex,
};
pub use crate::error::{LintError, Result};
pub use crate::lint::{
    FilterOptions, Lint, LintMetadata, LintRegistration, LintResult, LintSource, LintStatus,
    Registry, global_registry,
};
pub use crate::output::OutputFormat;
