// OCSP response model - Parsed BasicOCSPResponse fields (RFC 6960 §4.2)

use super::{Artifact, ArtifactKind, Extension};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parsed OCSP response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcspResponse {
    #[serde(default)]
    pub responder_id: String,
    pub produced_at: DateTime<Utc>,
    #[serde(default)]
    pub responses: Vec<SingleResponse>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// Status of one certificate in an OCSP response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertStatus {
    Good,
    Revoked,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleResponse {
    pub serial_number: String,
    pub cert_status: CertStatus,
    pub this_update: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_update: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_time: Option<DateTime<Utc>>,
}

impl SingleResponse {
    pub fn good(serial_number: impl Into<String>, this_update: DateTime<Utc>) -> Self {
        Self {
            serial_number: serial_number.into(),
            cert_status: CertStatus::Good,
            this_update,
            next_update: None,
            revocation_time: None,
        }
    }

    pub fn with_next_update(mut self, next_update: DateTime<Utc>) -> Self {
        self.next_update = Some(next_update);
        self
    }
}

impl OcspResponse {
    pub fn new(produced_at: DateTime<Utc>) -> Self {
        Self {
            responder_id: String::new(),
            produced_at,
            responses: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn with_response(mut self, response: SingleResponse) -> Self {
        self.responses.push(response);
        self
    }
}

impl Artifact for OcspResponse {
    const KIND: ArtifactKind = ArtifactKind::OcspResponse;

    fn reference_time(&self) -> DateTime<Utc> {
        self.produced_at
    }
}
