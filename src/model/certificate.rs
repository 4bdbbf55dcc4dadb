// Certificate model - Parsed X.509 certificate fields used by certificate lints

use super::{Artifact, ArtifactKind, Extension, has_extension};
use crate::utils::oids;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parsed certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    #[serde(default)]
    pub is_ca: bool,
    /// Extended key usage OIDs
    #[serde(default)]
    pub extended_key_usage: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
    /// SCTs embedded in the certificate (RFC 6962 §3.3)
    #[serde(default)]
    pub signed_certificate_timestamps: Vec<SignedCertificateTimestamp>,
    /// Decoded qcStatements extension, when present (ETSI EN 319 412-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qc_statements: Option<QcStatements>,
}

/// SCT (Signed Certificate Timestamp) embedded in a certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedCertificateTimestamp {
    /// Hex-encoded log id
    #[serde(default)]
    pub log_id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl SignedCertificateTimestamp {
    pub fn new(log_id: impl Into<String>, timestamp: u64) -> Self {
        Self {
            log_id: log_id.into(),
            timestamp,
        }
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        Self::new(String::new(), time.timestamp_millis().max(0) as u64)
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

/// Statement identifiers of a qcStatements extension, in encoding order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QcStatements {
    pub statement_ids: Vec<String>,
}

impl Certificate {
    /// Create a bare end-entity certificate with the given validity period
    pub fn new(not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> Self {
        Self {
            serial_number: String::new(),
            subject: String::new(),
            issuer: String::new(),
            not_before,
            not_after,
            is_ca: false,
            extended_key_usage: Vec::new(),
            extensions: Vec::new(),
            signed_certificate_timestamps: Vec::new(),
            qc_statements: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_ca(mut self, is_ca: bool) -> Self {
        self.is_ca = is_ca;
        self
    }

    pub fn with_extended_key_usage(mut self, oid: impl Into<String>) -> Self {
        self.extended_key_usage.push(oid.into());
        self
    }

    pub fn with_sct(mut self, sct: SignedCertificateTimestamp) -> Self {
        self.signed_certificate_timestamps.push(sct);
        self
    }

    /// Attach a qcStatements extension carrying the given statement ids
    pub fn with_qc_statements<I, S>(mut self, statement_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.has_extension(oids::QC_STATEMENTS) {
            self.extensions
                .push(Extension::new(oids::QC_STATEMENTS, false, Vec::new()));
        }
        self.qc_statements = Some(QcStatements {
            statement_ids: statement_ids.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn has_extension(&self, oid: &str) -> bool {
        has_extension(&self.extensions, oid)
    }

    /// Subject and issuer are the same name
    pub fn is_self_issued(&self) -> bool {
        !self.subject.is_empty() && self.subject == self.issuer
    }

    /// Neither a CA certificate nor self-issued
    pub fn is_subscriber(&self) -> bool {
        !self.is_ca && !self.is_self_issued()
    }
}

impl Artifact for Certificate {
    const KIND: ArtifactKind = ArtifactKind::Certificate;

    fn reference_time(&self) -> DateTime<Utc> {
        self.not_before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn validity() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_reference_time_is_not_before() {
        let (not_before, not_after) = validity();
        let cert = Certificate::new(not_before, not_after);
        assert_eq!(cert.reference_time(), not_before);
    }

    #[test]
    fn test_subscriber_detection() {
        let (not_before, not_after) = validity();
        let leaf = Certificate::new(not_before, not_after)
            .with_subject("CN=leaf")
            .with_issuer("CN=Issuing CA");
        let root = Certificate::new(not_before, not_after)
            .with_subject("CN=Root")
            .with_issuer("CN=Root");
        let ca = leaf.clone().with_ca(true);

        assert!(leaf.is_subscriber());
        assert!(!root.is_subscriber());
        assert!(!ca.is_subscriber());
    }

    #[test]
    fn test_qc_statements_adds_extension_once() {
        let (not_before, not_after) = validity();
        let cert = Certificate::new(not_before, not_after)
            .with_qc_statements(["0.4.0.1862.1.1"])
            .with_qc_statements(["0.4.0.1862.1.1", "0.4.0.1862.1.4"]);

        assert!(cert.has_extension(oids::QC_STATEMENTS));
        assert_eq!(cert.extensions.len(), 1);
        assert_eq!(cert.qc_statements.unwrap().statement_ids.len(), 2);
    }

    #[test]
    fn test_sct_time_round_trip() {
        let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let sct = SignedCertificateTimestamp::at(time);
        assert_eq!(sct.time(), Some(time));
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{
            "not_before": "2024-01-01T00:00:00Z",
            "not_after": "2025-01-01T00:00:00Z",
            "signed_certificate_timestamps": [{"timestamp": 1704067200000}]
        }"#;

        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert!(!cert.is_ca);
        assert_eq!(cert.signed_certificate_timestamps.len(), 1);
        assert!(cert.qc_statements.is_none());
    }
}
