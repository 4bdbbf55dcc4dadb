// Error types for certlint
//
// Structured error types using thiserror. Lint outcomes are never errors; these
// cover catalog registration, registry filtering, artifact decoding and configuration.

use crate::model::ArtifactKind;
use chrono::{DateTime, Utc};
use std::io;
use thiserror::Error;

/// Result type for certlint operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Main error type for certlint operations
#[derive(Debug, Error)]
pub enum LintError {
    /// A lint with the same name is already registered
    #[error("Duplicate lint name: {name} is already registered")]
    DuplicateLintName { name: String },

    /// Effective window is empty or inverted
    #[error(
        "Lint {name} has an invalid effective window: effective {effective} is not before ineffective {ineffective}"
    )]
    InvalidEffectiveWindow {
        name: String,
        effective: DateTime<Utc>,
        ineffective: DateTime<Utc>,
    },

    /// A filter referenced a lint the registry does not contain
    #[error("Unknown lint name: {name}")]
    UnknownLintName { name: String },

    /// A source identifier could not be recognised
    #[error("Unknown lint source: {source_id}")]
    UnknownLintSource { source_id: String },

    /// Include and exclude name lists were both given
    #[error("Include names and exclude names cannot both be set")]
    ConflictingNameFilters,

    /// Lint name pattern did not compile
    #[error("Invalid lint name pattern: {0}")]
    InvalidNamePattern(#[from] regex::Error),

    /// The artifact bytes could not be decoded into the lint model
    #[error("Failed to parse {kind}: {message}")]
    Parse { kind: ArtifactKind, message: String },

    /// PEM parsing errors
    #[error("PEM parsing error: {0}")]
    Pem(#[from] pem::PemError),

    /// Base64 decoding errors
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LintError {
    pub(crate) fn parse(kind: ArtifactKind, message: impl Into<String>) -> Self {
        LintError::Parse {
            kind,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for LintError {
    fn from(err: toml::de::Error) -> Self {
        LintError::Config {
            message: format!("Failed to parse TOML config: {}", err),
        }
    }
}

impl From<toml::ser::Error> for LintError {
    fn from(err: toml::ser::Error) -> Self {
        LintError::Config {
            message: format!("Failed to serialize config: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duplicate_name_message() {
        let err = LintError::DuplicateLintName {
            name: "e_example".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Duplicate"));
        assert!(msg.contains("e_example"));
    }

    #[test]
    fn test_invalid_window_message() {
        let err = LintError::InvalidEffectiveWindow {
            name: "w_window".to_string(),
            effective: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            ineffective: Utc.with_ymd_and_hms(2019, 8, 13, 0, 0, 0).unwrap(),
        };

        let msg = err.to_string();
        assert!(msg.contains("w_window"));
        assert!(msg.contains("2026-03-01"));
    }

    #[test]
    fn test_parse_error_names_artifact_kind() {
        let err = LintError::parse(ArtifactKind::RevocationList, "truncated input");
        assert_eq!(
            err.to_string(),
            "Failed to parse revocation list: truncated input"
        );
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: LintError = io_err.into();

        assert!(matches!(err, LintError::Io { .. }));
    }

    #[test]
    fn test_error_chain_preserved() {
        use std::error::Error;

        let err: LintError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.source().is_some());
    }
}
