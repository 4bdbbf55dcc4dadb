// Artifact model - Parsed certificates, CRLs and OCSP responses consumed by lints
//
// These records are produced by a parser (see `crate::parser`) or built directly by
// callers. Lints only ever read them.

pub mod certificate;
pub mod ocsp;
pub mod revocation_list;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use certificate::{Certificate, QcStatements, SignedCertificateTimestamp};
pub use ocsp::{CertStatus, OcspResponse, SingleResponse};
pub use revocation_list::{RevocationList, RevokedCertificate};

/// The three kinds of artifact a lint can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Certificate,
    RevocationList,
    OcspResponse,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Certificate => write!(f, "certificate"),
            ArtifactKind::RevocationList => write!(f, "revocation list"),
            ArtifactKind::OcspResponse => write!(f, "OCSP response"),
        }
    }
}

/// A lintable artifact
///
/// The reference time is the instant used to decide whether a lint was in force
/// when the artifact was issued.
pub trait Artifact: Sync {
    const KIND: ArtifactKind;

    fn reference_time(&self) -> DateTime<Utc>;
}

/// A raw X.509 extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Dotted OID (e.g., "1.3.6.1.5.5.7.1.3")
    pub oid: String,
    #[serde(default)]
    pub critical: bool,
    /// Contents of the extnValue OCTET STRING
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<u8>,
}

impl Extension {
    pub fn new(oid: impl Into<String>, critical: bool, value: Vec<u8>) -> Self {
        Self {
            oid: oid.into(),
            critical,
            value,
        }
    }
}

pub(crate) fn has_extension(extensions: &[Extension], oid: &str) -> bool {
    extensions.iter().any(|ext| ext.oid == oid)
}
