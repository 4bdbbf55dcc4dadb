// e_cs_max_validity_period_460_days - Code Signing validity cap from the CSC-31 cutover
//
// CS BR 6.3.2: certificates issued on or after March 1st, 2026 MUST NOT exceed 460 days.

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::Certificate;
use crate::utils::dates::CABF_CS_CSC_31_DATE;
use chrono::TimeDelta;

const MAX_VALIDITY_DAYS: i64 = 460;

pub struct CsMaxValidityPeriod460Days;

pub fn registration() -> LintRegistration {
    LintRegistration::certificate(
        LintMetadata::new(
            "e_cs_max_validity_period_460_days",
            "Code Signing certificate validity must not exceed 460 days for certificates issued on or after March 1st, 2026",
            "CS BR 6.3.2 - v3.10",
            LintSource::CabfCsBaselineRequirements,
        )
        .effective_from(*CABF_CS_CSC_31_DATE),
        CsMaxValidityPeriod460Days,
    )
}

impl Lint<Certificate> for CsMaxValidityPeriod460Days {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(max_not_after) = cert
            .not_before
            .checked_add_signed(TimeDelta::days(MAX_VALIDITY_DAYS))
        else {
            return LintResult::fatal("notBefore plus 460 days is out of range");
        };

        if cert.not_after > max_not_after {
            return LintResult::error(
                "Code Signing certificates must have a validity period of 460 days or less",
            );
        }
        LintResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use crate::utils::dates::utc_date;

    fn subscriber(days: i64) -> Certificate {
        let not_before = utc_date(2026, 3, 1);
        Certificate::new(not_before, not_before + TimeDelta::days(days))
            .with_subject("CN=Example Software")
            .with_issuer("CN=Example CS CA")
    }

    #[test]
    fn test_460_days_passes() {
        let cert = subscriber(460);
        assert!(CsMaxValidityPeriod460Days.check_applies(&cert));
        assert_eq!(
            CsMaxValidityPeriod460Days.execute(&cert).status,
            LintStatus::Pass
        );
    }

    #[test]
    fn test_461_days_errors() {
        let result = CsMaxValidityPeriod460Days.execute(&subscriber(461));
        assert_eq!(result.status, LintStatus::Error);
        assert!(result.details.contains("460 days"));
    }

    #[test]
    fn test_ca_not_applicable() {
        let ca = subscriber(3650).with_ca(true);
        assert!(!CsMaxValidityPeriod460Days.check_applies(&ca));
    }
}
