// Lint selection arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::lint::{FilterOptions, LintSource};
use chrono::{DateTime, Utc};
use clap::Args;

/// Restrict which registered lints run
///
/// Every populated list replaces the corresponding list from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only run these lints (comma-separated names)
    #[arg(long = "include-names", value_delimiter = ',', conflicts_with = "exclude_names")]
    pub include_names: Vec<String>,

    /// Skip these lints (comma-separated names)
    #[arg(long = "exclude-names", value_delimiter = ',')]
    pub exclude_names: Vec<String>,

    /// Only run lints from these sources (e.g., CABF_BR,RFC5280)
    #[arg(long = "include-sources", value_delimiter = ',')]
    pub include_sources: Vec<LintSource>,

    /// Skip lints from these sources
    #[arg(long = "exclude-sources", value_delimiter = ',')]
    pub exclude_sources: Vec<LintSource>,

    /// Only run lints whose name matches this regular expression
    #[arg(long = "name-pattern", value_name = "REGEX")]
    pub name_pattern: Option<String>,

    /// Only run lints in force at this instant (RFC 3339)
    #[arg(long = "effective-at", value_name = "TIMESTAMP")]
    pub effective_at: Option<DateTime<Utc>>,
}

impl FilterArgs {
    /// Overlay the command line selection onto `options`
    pub fn apply(&self, options: &mut FilterOptions) {
        if !self.include_names.is_empty() {
            options.include_names = self.include_names.clone();
        }
        if !self.exclude_names.is_empty() {
            options.exclude_names = self.exclude_names.clone();
        }
        if !self.include_sources.is_empty() {
            options.include_sources = self.include_sources.clone();
        }
        if !self.exclude_sources.is_empty() {
            options.exclude_sources = self.exclude_sources.clone();
        }
        if let Some(pattern) = &self.name_pattern {
            options.name_pattern = Some(pattern.clone());
        }
        if let Some(at) = self.effective_at {
            options.effective_at = Some(at);
        }
    }
}
