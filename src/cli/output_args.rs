// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

/// Output format and listing options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Print a colored summary table instead of JSON
    #[arg(long = "summary")]
    pub summary: bool,

    /// List the selected lints as JSON lines and exit
    #[arg(long = "list-lints-json")]
    pub list_lints_json: bool,

    /// List the sources of the selected lints and exit
    #[arg(long = "list-lints-source")]
    pub list_lints_source: bool,
}
