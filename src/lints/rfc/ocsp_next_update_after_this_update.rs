// e_ocsp_next_update_after_this_update - nextUpdate must be later than thisUpdate

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::OcspResponse;
use crate::utils::dates::RFC6960_DATE;

pub struct OcspNextUpdateAfterThisUpdate;

pub fn registration() -> LintRegistration {
    LintRegistration::ocsp_response(
        LintMetadata::new(
            "e_ocsp_next_update_after_this_update",
            "The time at or before which newer information will be available must be later than thisUpdate",
            "RFC 6960: Section 2.4",
            LintSource::Rfc6960,
        )
        .effective_from(*RFC6960_DATE),
        OcspNextUpdateAfterThisUpdate,
    )
}

impl Lint<OcspResponse> for OcspNextUpdateAfterThisUpdate {
    fn check_applies(&self, response: &OcspResponse) -> bool {
        !response.responses.is_empty()
    }

    fn execute(&self, response: &OcspResponse) -> LintResult {
        let offending = response.responses.iter().find(|single| {
            single
                .next_update
                .is_some_and(|next_update| next_update <= single.this_update)
        });

        match offending {
            Some(single) => LintResult::error(format!(
                "Response for serial {} has a nextUpdate that is not later than its thisUpdate",
                single.serial_number
            )),
            None => LintResult::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use crate::model::SingleResponse;
    use crate::utils::dates::utc_date;

    #[test]
    fn test_no_single_responses_not_applicable() {
        let response = OcspResponse::new(utc_date(2024, 1, 1));
        assert!(!OcspNextUpdateAfterThisUpdate.check_applies(&response));
    }

    #[test]
    fn test_ordered_updates_pass() {
        let this_update = utc_date(2024, 1, 1);
        let response = OcspResponse::new(this_update)
            .with_response(SingleResponse::good("01", this_update).with_next_update(utc_date(2024, 1, 2)))
            .with_response(SingleResponse::good("02", this_update));
        assert_eq!(
            OcspNextUpdateAfterThisUpdate.execute(&response).status,
            LintStatus::Pass
        );
    }

    #[test]
    fn test_equal_updates_error() {
        let this_update = utc_date(2024, 1, 1);
        let response = OcspResponse::new(this_update)
            .with_response(SingleResponse::good("0a", this_update).with_next_update(this_update));
        let result = OcspNextUpdateAfterThisUpdate.execute(&response);
        assert_eq!(result.status, LintStatus::Error);
        assert!(result.details.contains("0a"));
    }
}
