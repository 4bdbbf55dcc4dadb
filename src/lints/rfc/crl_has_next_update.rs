// e_crl_has_next_update - Conforming CRL issuers MUST include nextUpdate

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::RevocationList;
use crate::utils::dates::RFC5280_DATE;

pub struct CrlHasNextUpdate;

pub fn registration() -> LintRegistration {
    LintRegistration::revocation_list(
        LintMetadata::new(
            "e_crl_has_next_update",
            "Conforming CRL issuers MUST include the nextUpdate field in all CRLs",
            "RFC 5280: Section 5.1.2.5",
            LintSource::Rfc5280,
        )
        .effective_from(*RFC5280_DATE),
        CrlHasNextUpdate,
    )
}

impl Lint<RevocationList> for CrlHasNextUpdate {
    fn check_applies(&self, _crl: &RevocationList) -> bool {
        true
    }

    fn execute(&self, crl: &RevocationList) -> LintResult {
        match crl.next_update {
            Some(_) => LintResult::pass(),
            None => LintResult::error("Conforming CRL issuers MUST include the nextUpdate field in all CRLs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintStatus;
    use crate::utils::dates::utc_date;

    #[test]
    fn test_next_update_present() {
        let crl = RevocationList::new(utc_date(2024, 1, 1)).with_next_update(utc_date(2024, 1, 8));
        assert_eq!(CrlHasNextUpdate.execute(&crl).status, LintStatus::Pass);
    }

    #[test]
    fn test_next_update_missing() {
        let crl = RevocationList::new(utc_date(2024, 1, 1));
        assert!(CrlHasNextUpdate.check_applies(&crl));
        assert_eq!(CrlHasNextUpdate.execute(&crl).status, LintStatus::Error);
    }
}
