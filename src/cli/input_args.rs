// Artifact input arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::model::ArtifactKind;
use crate::parser::InputFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Kind of artifact named on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    #[default]
    Certificate,
    Crl,
    Ocsp,
}

impl From<InputKind> for ArtifactKind {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Certificate => ArtifactKind::Certificate,
            InputKind::Crl => ArtifactKind::RevocationList,
            InputKind::Ocsp => ArtifactKind::OcspResponse,
        }
    }
}

/// Where the artifact comes from and how it is encoded
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Artifact file; read from stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input encoding
    #[arg(long = "format", value_enum, default_value_t = InputFormat::Pem)]
    pub format: InputFormat,

    /// Artifact kind
    #[arg(long = "kind", value_enum, default_value_t = InputKind::Certificate)]
    pub kind: InputKind,
}
