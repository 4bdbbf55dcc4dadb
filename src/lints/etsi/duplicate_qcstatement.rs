// e_duplicate_qcstatement - Each qcStatement may appear at most once

use crate::lint::{Lint, LintMetadata, LintRegistration, LintResult, LintSource};
use crate::model::Certificate;
use crate::utils::dates::ETSI_EN_319_412_5_V2_6_0_DATE;
use crate::utils::oids;
use std::collections::HashSet;

pub struct DuplicateQcStatement;

pub fn registration() -> LintRegistration {
    LintRegistration::certificate(
        LintMetadata::new(
            "e_duplicate_qcstatement",
            "Checks for duplicated QcStatements, returning error if any are found",
            "ETSI EN 319 412-5 v2.6.0, clause QCS-4.1-02A",
            LintSource::EtsiEsi,
        )
        .effective_from(*ETSI_EN_319_412_5_V2_6_0_DATE),
        DuplicateQcStatement,
    )
}

impl Lint<Certificate> for DuplicateQcStatement {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.has_extension(oids::QC_STATEMENTS)
    }

    fn execute(&self, cert: &Certificate) -> LintResult {
        let Some(statements) = &cert.qc_statements else {
            return LintResult::pass();
        };

        let mut seen = HashSet::new();
        if statements.statement_ids.iter().any(|id| !seen.insert(id)) {
            return LintResult::error(
                "The qcStatements extension shall not include more than one instance of a particular qcStatement",
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

    const QC_COMPLIANCE: &str = "0.4.0.1862.1.1";
    const QC_SSCD: &str = "0.4.0.1862.1.4";

    fn cert() -> Certificate {
        Certificate::new(utc_date(2025, 6, 1), utc_date(2026, 6, 1))
    }

    #[test]
    fn test_without_extension_not_applicable() {
        assert!(!DuplicateQcStatement.check_applies(&cert()));
    }

    #[test]
    fn test_distinct_statements_pass() {
        let cert = cert().with_qc_statements([QC_COMPLIANCE, QC_SSCD]);
        assert!(DuplicateQcStatement.check_applies(&cert));
        assert_eq!(DuplicateQcStatement.execute(&cert).status, LintStatus::Pass);
    }

    #[test]
    fn test_repeated_statement_errors() {
        let cert = cert().with_qc_statements([QC_COMPLIANCE, QC_SSCD, QC_COMPLIANCE]);
        let result = DuplicateQcStatement.execute(&cert);
        assert_eq!(result.status, LintStatus::Error);
        assert!(result.details.contains("more than one instance"));
    }
}
