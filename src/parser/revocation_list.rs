// Revocation list parser - X.509 CRL DER to the revocation list model

use super::asn1_to_utc;
use crate::error::{LintError, Result};
use crate::model::{ArtifactKind, Extension, RevocationList, RevokedCertificate};
use tracing::debug;
use x509_parser::prelude::*;
use x509_parser::revocation_list::CertificateRevocationList;

const KIND: ArtifactKind = ArtifactKind::RevocationList;

/// Parse a DER-encoded CRL
pub fn parse_revocation_list(der: &[u8]) -> Result<RevocationList> {
    let (_, crl) = CertificateRevocationList::from_der(der)
        .map_err(|e| LintError::parse(KIND, format!("Failed to parse CRL: {}", e)))?;

    let this_update = asn1_to_utc(crl.last_update(), KIND, "thisUpdate")?;
    let next_update = crl
        .next_update()
        .map(|time| asn1_to_utc(time, KIND, "nextUpdate"))
        .transpose()?;

    let revoked_certificates = crl
        .iter_revoked_certificates()
        .map(|revoked| {
            Ok(RevokedCertificate {
                serial_number: revoked.user_certificate.to_str_radix(16),
                revocation_date: asn1_to_utc(revoked.revocation_date, KIND, "revocationDate")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let extensions = crl
        .extensions()
        .iter()
        .map(|ext| Extension::new(ext.oid.to_id_string(), ext.critical, ext.value.to_vec()))
        .collect();

    let parsed = RevocationList {
        issuer: crl.issuer().to_string(),
        this_update,
        next_update,
        crl_number: crl.crl_number().map(|number| number.to_str_radix(16)),
        revoked_certificates,
        extensions,
    };

    debug!(
        "Parsed CRL from {} with {} revoked entries",
        parsed.issuer,
        parsed.revoked_certificates.len()
    );
    Ok(parsed)
}
