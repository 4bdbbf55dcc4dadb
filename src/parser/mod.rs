// Artifact parser - Decodes PEM, base64, DER and JSON input into the lint model
//
// This is a thin adapter in front of the engine; lints never see raw bytes.

pub mod certificate;
pub mod revocation_list;

use crate::error::{LintError, Result};
use crate::model::{ArtifactKind, Certificate, OcspResponse, RevocationList};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use x509_parser::time::ASN1Time;

pub use certificate::parse_certificate;
pub use revocation_list::parse_revocation_list;

/// Encoding of the input bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Pem,
    Der,
    Base64,
    /// The model itself, serialized as JSON
    Json,
}

/// Strip the transport encoding and return DER bytes
pub fn decode_der(input: &[u8], format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Der => Ok(input.to_vec()),
        InputFormat::Pem => Ok(pem::parse(input)?.contents().to_vec()),
        InputFormat::Base64 => {
            let compact: Vec<u8> = input
                .iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .collect();
            Ok(base64::engine::general_purpose::STANDARD.decode(compact)?)
        }
        InputFormat::Json => Err(LintError::Config {
            message: "JSON input carries no DER encoding".to_string(),
        }),
    }
}

pub fn certificate_from_input(input: &[u8], format: InputFormat) -> Result<Certificate> {
    match format {
        InputFormat::Json => Ok(serde_json::from_slice(input)?),
        _ => parse_certificate(&decode_der(input, format)?),
    }
}

pub fn revocation_list_from_input(input: &[u8], format: InputFormat) -> Result<RevocationList> {
    match format {
        InputFormat::Json => Ok(serde_json::from_slice(input)?),
        _ => parse_revocation_list(&decode_der(input, format)?),
    }
}

/// OCSP responses are only accepted in their JSON model form
pub fn ocsp_response_from_input(input: &[u8], format: InputFormat) -> Result<OcspResponse> {
    match format {
        InputFormat::Json => Ok(serde_json::from_slice(input)?),
        other => Err(LintError::parse(
            ArtifactKind::OcspResponse,
            format!("{:?} input is not supported, supply the response as JSON", other),
        )),
    }
}

pub(crate) fn asn1_to_utc(
    time: ASN1Time,
    kind: ArtifactKind,
    field: &str,
) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| LintError::parse(kind, format!("{} is out of range", field)))
}

pub(crate) fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_der_passthrough() {
        let der = vec![0x30, 0x03, 0x02, 0x01, 0x01];
        assert_eq!(decode_der(&der, InputFormat::Der).unwrap(), der);
    }

    #[test]
    fn test_decode_base64_ignores_whitespace() {
        let decoded = decode_der(b"MAMC\nAQE=\n", InputFormat::Base64).unwrap();
        assert_eq!(decoded, vec![0x30, 0x03, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_decode_pem() {
        let input = b"-----BEGIN CERTIFICATE-----\nMAMCAQE=\n-----END CERTIFICATE-----\n";
        let decoded = decode_der(input, InputFormat::Pem).unwrap();
        assert_eq!(decoded, vec![0x30, 0x03, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_der(b"not pem", InputFormat::Pem),
            Err(LintError::Pem(_))
        ));
        assert!(matches!(
            decode_der(b"@@@", InputFormat::Base64),
            Err(LintError::Base64(_))
        ));
    }

    #[test]
    fn test_json_certificate_input() {
        let json = br#"{"not_before":"2024-01-01T00:00:00Z","not_after":"2025-01-01T00:00:00Z"}"#;
        let cert = certificate_from_input(json, InputFormat::Json).unwrap();
        assert!(cert.is_subscriber());
        assert!(cert.extensions.is_empty());
    }

    #[test]
    fn test_ocsp_requires_json() {
        let err = ocsp_response_from_input(b"\x30\x00", InputFormat::Der).unwrap_err();
        assert!(err.to_string().contains("OCSP response"));

        let json = br#"{"produced_at":"2024-01-01T00:00:00Z","responses":[{"serial_number":"01","cert_status":"good","this_update":"2024-01-01T00:00:00Z"}]}"#;
        let response = ocsp_response_from_input(json, InputFormat::Json).unwrap();
        assert_eq!(response.responses.len(), 1);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x0a, 0xff]), "0aff");
    }
}
