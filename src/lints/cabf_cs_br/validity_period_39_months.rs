// e_cs_max_validity_period_39_months - Code Signing validity cap before the CSC-31 cutover
//
// CS BR 6.3.2: certificates issued before March 1st, 2026 MUST NOT exceed 39 months.

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::Certificate;
use crate::utils::dates::{CABF_CS_BRS_1_2_DATE, CABF_CS_CSC_31_DATE};
use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};

const MAX_VALIDITY_MONTHS: u32 = 39;

pub struct CsMaxValidityPeriod39Months;

pub fn registration() -> LintRegistration {
    LintRegistration::certificate(
        LintMetadata::new(
            "e_cs_max_validity_period_39_months",
            "Code Signing certificate validity must not exceed 39 months for certificates issued before March 1st, 2026",
            "CS BR 6.3.2 - v3.10",
            LintSource::CabfCsBaselineRequirements,
        )
        .effective_from(*CABF_CS_BRS_1_2_DATE)
        .effective_until(*CABF_CS_CSC_31_DATE),
        CsMaxValidityPeriod39Months,
    )
}

impl Lint<Certificate> for CsMaxValidityPeriod39Months {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subscriber()
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(max_not_after) = add_months_rolling(cert.not_before, MAX_VALIDITY_MONTHS) else {
            return LintResult::fatal("notBefore plus 39 months is out of range");
        };

        if cert.not_after > max_not_after {
            return LintResult::error(
                "Code Signing certificates must have a validity period of 39 months or less",
            );
        }
        LintResult::pass()
    }
}

/// Calendar month addition where an overflowing day rolls into the following month
///
/// Nov 30 + 3 months is Mar 2 (Feb 30 normalized), not Feb 28.
fn add_months_rolling(start: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let first_of_month = start.with_day(1)?;
    let shifted = first_of_month.checked_add_months(Months::new(months))?;
    shifted.checked_add_signed(TimeDelta::days(i64::from(start.day()) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use crate::utils::dates::utc_date;
    use crate::utils::oids::EKU_CODE_SIGNING;

    fn code_signing(not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> Certificate {
        Certificate::new(not_before, not_after)
            .with_subject("CN=Example Software")
            .with_issuer("CN=Example CS CA")
            .with_extended_key_usage(EKU_CODE_SIGNING)
    }

    #[test]
    fn test_exactly_39_months_passes() {
        let cert = code_signing(utc_date(2023, 1, 15), utc_date(2026, 4, 15));
        assert!(CsMaxValidityPeriod39Months.check_applies(&cert));
        assert_eq!(
            CsMaxValidityPeriod39Months.execute(&cert).status,
            LintStatus::Pass
        );
    }

    #[test]
    fn test_one_second_over_errors() {
        let cert = code_signing(
            utc_date(2023, 1, 15),
            utc_date(2026, 4, 15) + TimeDelta::seconds(1),
        );
        let result = CsMaxValidityPeriod39Months.execute(&cert);
        assert_eq!(result.status, LintStatus::Error);
        assert!(result.details.contains("39 months"));
    }

    #[test]
    fn test_month_end_rolls_over() {
        // 2027-02-30 normalizes to 2027-03-02
        let cert = code_signing(utc_date(2023, 11, 30), utc_date(2027, 3, 1));
        assert_eq!(
            CsMaxValidityPeriod39Months.execute(&cert).status,
            LintStatus::Pass
        );

        let cert = code_signing(utc_date(2023, 11, 30), utc_date(2027, 3, 2));
        assert_eq!(
            CsMaxValidityPeriod39Months.execute(&cert).status,
            LintStatus::Pass
        );

        let cert = code_signing(
            utc_date(2023, 11, 30),
            utc_date(2027, 3, 2) + TimeDelta::seconds(1),
        );
        assert_eq!(
            CsMaxValidityPeriod39Months.execute(&cert).status,
            LintStatus::Error
        );
    }

    #[test]
    fn test_add_months_rolling_keeps_time_of_day() {
        let start = utc_date(2024, 1, 31) + TimeDelta::hours(13);
        assert_eq!(
            add_months_rolling(start, 1),
            Some(utc_date(2024, 3, 2) + TimeDelta::hours(13))
        );
        assert_eq!(
            add_months_rolling(utc_date(2023, 1, 15), 39),
            Some(utc_date(2026, 4, 15))
        );
    }

    #[test]
    fn test_ca_and_self_issued_not_applicable() {
        let ca = code_signing(utc_date(2023, 1, 15), utc_date(2033, 1, 15)).with_ca(true);
        assert!(!CsMaxValidityPeriod39Months.check_applies(&ca));

        let self_issued = code_signing(utc_date(2023, 1, 15), utc_date(2033, 1, 15))
            .with_issuer("CN=Example Software");
        assert!(!CsMaxValidityPeriod39Months.check_applies(&self_issued));
    }

    #[test]
    fn test_window_ends_at_csc_31() {
        let registration = registration();
        let metadata = registration.metadata();
        assert!(metadata.is_effective_at(utc_date(2026, 2, 28)));
        assert!(!metadata.is_effective_at(utc_date(2026, 3, 1)));
    }
}
