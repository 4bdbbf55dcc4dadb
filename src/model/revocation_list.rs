// Revocation list model - Parsed CRL fields used by revocation list lints

use super::{Artifact, ArtifactKind, Extension};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parsed certificate revocation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevocationList {
    #[serde(default)]
    pub issuer: String,
    pub this_update: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_update: Option<DateTime<Utc>>,
    /// Hex-encoded CRL number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crl_number: Option<String>,
    #[serde(default)]
    pub revoked_certificates: Vec<RevokedCertificate>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// A revoked certificate entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedCertificate {
    pub serial_number: String,
    pub revocation_date: DateTime<Utc>,
}

impl RevocationList {
    pub fn new(this_update: DateTime<Utc>) -> Self {
        Self {
            issuer: String::new(),
            this_update,
            next_update: None,
            crl_number: None,
            revoked_certificates: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_next_update(mut self, next_update: DateTime<Utc>) -> Self {
        self.next_update = Some(next_update);
        self
    }

    pub fn with_revoked(mut self, serial_number: impl Into<String>, date: DateTime<Utc>) -> Self {
        self.revoked_certificates.push(RevokedCertificate {
            serial_number: serial_number.into(),
            revocation_date: date,
        });
        self
    }
}

impl Artifact for RevocationList {
    const KIND: ArtifactKind = ArtifactKind::RevocationList;

    fn reference_time(&self) -> DateTime<Utc> {
        self.this_update
    }
}
