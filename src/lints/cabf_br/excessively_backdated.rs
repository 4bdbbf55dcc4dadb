// e_excessively backdated - notBefore must be within 48 hours of signing
//
// The signing time can be no earlier than the timestamp of any embedded SCT, so an SCT
// more than 48 hours after notBefore proves the certificate was backdated.

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::Certificate;
use crate::utils::dates::SC62_EFFECTIVE_DATE;
use chrono::TimeDelta;

const MAX_BACKDATE_HOURS: i64 = 48;

pub struct ExcessivelyBackdated;

pub fn registration() -> LintRegistration {
    LintRegistration::certificate(
        LintMetadata::new(
            "e_excessively backdated",
            "notBefore must be a value within 48 hours of the certificate signing",
            "TLS BRs §7.1.2.7",
            LintSource::CabfBaselineRequirements,
        )
        .effective_from(*SC62_EFFECTIVE_DATE),
        ExcessivelyBackdated,
    )
}

impl Lint<Certificate> for ExcessivelyBackdated {
    fn check_applies(&self, cert: &Certificate) -> bool {
        !cert.signed_certificate_timestamps.is_empty()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let max_delay = TimeDelta::hours(MAX_BACKDATE_HOURS);

        for sct in &cert.signed_certificate_timestamps {
            let Some(logged_at) = sct.time() else {
                return LintResult::fatal(format!(
                    "SCT timestamp {} is out of range",
                    sct.timestamp
                ));
            };
            if logged_at - cert.not_before > max_delay {
                return LintResult::error(
                    "The Certificate's notBefore is more than 48 hours older than at least one embedded SCT",
                );
            }
        }
        LintResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use crate::model::SignedCertificateTimestamp;
    use crate::utils::dates::utc_date;

    fn cert_logged_after(hours: i64) -> Certificate {
        let not_before = utc_date(2024, 3, 1);
        Certificate::new(not_before, not_before + TimeDelta::days(90))
            .with_sct(SignedCertificateTimestamp::at(not_before + TimeDelta::hours(hours)))
    }

    #[test]
    fn test_no_scts_not_applicable() {
        let cert = Certificate::new(utc_date(2024, 3, 1), utc_date(2024, 6, 1));
        assert!(!ExcessivelyBackdated.check_applies(&cert));
    }

    #[test]
    fn test_sct_within_48_hours_passes() {
        let cert = cert_logged_after(47);
        assert!(ExcessivelyBackdated.check_applies(&cert));
        assert_eq!(ExcessivelyBackdated.execute(&cert).status, LintStatus::Pass);
        assert_eq!(
            ExcessivelyBackdated.execute(&cert_logged_after(48)).status,
            LintStatus::Pass
        );
    }

    #[test]
    fn test_sct_after_48_hours_errors() {
        let result = ExcessivelyBackdated.execute(&cert_logged_after(49));
        assert_eq!(result.status, LintStatus::Error);
        assert!(result.details.contains("48 hours"));
    }

    #[test]
    fn test_any_late_sct_errors() {
        let cert = cert_logged_after(1).with_sct(SignedCertificateTimestamp::at(
            utc_date(2024, 3, 1) + TimeDelta::days(5),
        ));
        assert_eq!(ExcessivelyBackdated.execute(&cert).status, LintStatus::Error);
    }

    #[test]
    fn test_sct_before_not_before_passes() {
        assert_eq!(
            ExcessivelyBackdated.execute(&cert_logged_after(-2)).status,
            LintStatus::Pass
        );
    }
}
