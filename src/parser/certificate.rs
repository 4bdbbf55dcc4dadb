// Certificate parser - X.509 DER to the certificate model

use super::{asn1_to_utc, to_hex};
use crate::error::{LintError, Result};
use crate::model::{ArtifactKind, Certificate, Extension, QcStatements, SignedCertificateTimestamp};
use crate::utils::oids;
use tracing::debug;
use x509_parser::der_parser::der::parse_der;
use x509_parser::extensions::ExtendedKeyUsage;
use x509_parser::prelude::*;

const KIND: ArtifactKind = ArtifactKind::Certificate;

/// Parse a DER-encoded certificate
pub fn parse_certificate(der: &[u8]) -> Result<Certificate> {
    let (_, cert) = X509Certificate::from_der(der)
        .map_err(|e| LintError::parse(KIND, format!("Failed to parse X.509 certificate: {}", e)))?;

    let not_before = asn1_to_utc(cert.validity().not_before, KIND, "notBefore")?;
    let not_after = asn1_to_utc(cert.validity().not_after, KIND, "notAfter")?;

    let is_ca = cert
        .basic_constraints()
        .ok()
        .flatten()
        .is_some_and(|bc| bc.value.ca);

    let extended_key_usage = cert
        .extended_key_usage()
        .ok()
        .flatten()
        .map(|eku| eku_oids(eku.value))
        .unwrap_or_default();

    let mut parsed = Certificate::new(not_before, not_after)
        .with_subject(cert.subject().to_string())
        .with_issuer(cert.issuer().to_string())
        .with_ca(is_ca);
    parsed.serial_number = cert.serial.to_str_radix(16);
    parsed.extended_key_usage = extended_key_usage;

    for ext in cert.extensions() {
        let oid = ext.oid.to_id_string();

        if let ParsedExtension::SCT(scts) = ext.parsed_extension() {
            parsed.signed_certificate_timestamps = scts
                .iter()
                .map(|sct| SignedCertificateTimestamp::new(to_hex(sct.id.key_id), sct.timestamp))
                .collect();
        }
        if oid == oids::QC_STATEMENTS {
            parsed.qc_statements = Some(parse_qc_statements(ext.value)?);
        }

        parsed.extensions.push(Extension::new(oid, ext.critical, ext.value.to_vec()));
    }

    debug!(
        "Parsed certificate {} with {} extensions",
        parsed.serial_number,
        parsed.extensions.len()
    );
    Ok(parsed)
}

fn eku_oids(eku: &ExtendedKeyUsage) -> Vec<String> {
    let mut result: Vec<String> = [
        (eku.server_auth, oids::EKU_SERVER_AUTH),
        (eku.client_auth, oids::EKU_CLIENT_AUTH),
        (eku.code_signing, oids::EKU_CODE_SIGNING),
        (eku.email_protection, oids::EKU_EMAIL_PROTECTION),
        (eku.time_stamping, oids::EKU_TIME_STAMPING),
        (eku.ocsp_signing, oids::EKU_OCSP_SIGNING),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, oid)| oid.to_string())
    .collect();
    result.extend(eku.other.iter().map(|oid| oid.to_id_string()));
    result
}

/// Statement ids of a qcStatements extension value, in encoding order
///
/// QCStatements ::= SEQUENCE OF QCStatement
/// QCStatement ::= SEQUENCE { statementId OBJECT IDENTIFIER, statementInfo ANY OPTIONAL }
pub fn parse_qc_statements(value: &[u8]) -> Result<QcStatements> {
    let malformed = |what: &str| LintError::parse(KIND, format!("Malformed qcStatements: {}", what));

    let (_, statements) = parse_der(value).map_err(|e| malformed(&e.to_string()))?;
    let statements = statements
        .as_sequence()
        .map_err(|_| malformed("expected SEQUENCE OF QCStatement"))?;

    let mut statement_ids = Vec::with_capacity(statements.len());
    for statement in statements {
        let id = statement
            .as_sequence()
            .ok()
            .and_then(|fields| fields.first())
            .and_then(|first| first.as_oid().ok())
            .ok_or_else(|| malformed("QCStatement without statementId"))?;
        statement_ids.push(id.to_id_string());
    }
    Ok(QcStatements { statement_ids })
}

#[cfg(test)]
mod tests {
    use super::*;

    // SEQUENCE { SEQUENCE { OID 0.4.0.1862.1.1 }, SEQUENCE { OID 0.4.0.1862.1.1 } }
    const DUPLICATED_QC_COMPLIANCE: &[u8] = &[
        0x30, 0x14, 0x30, 0x08, 0x06, 0x06, 0x04, 0x00, 0x8e, 0x46, 0x01, 0x01, 0x30, 0x08, 0x06,
        0x06, 0x04, 0x00, 0x8e, 0x46, 0x01, 0x01,
    ];

    #[test]
    fn test_parse_qc_statements_keeps_duplicates() {
        let statements = parse_qc_statements(DUPLICATED_QC_COMPLIANCE).unwrap();
        assert_eq!(
            statements.statement_ids,
            vec!["0.4.0.1862.1.1", "0.4.0.1862.1.1"]
        );
    }

    #[test]
    fn test_parse_qc_statements_rejects_garbage() {
        assert!(parse_qc_statements(&[0x02, 0x01, 0x01]).is_err());
        assert!(parse_qc_statements(&[0xff]).is_err());
    }

    #[test]
    fn test_parse_certificate_rejects_garbage() {
        let err = parse_certificate(&[0x30, 0x03, 0x02, 0x01, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            LintError::Parse {
                kind: ArtifactKind::Certificate,
                ..
            }
        ));
    }
}
