// Result set - Aggregated outcome of one lint run over one artifact

use crate::lint::{LintResult, LintStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every lint's outcome for one artifact, with run metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Result schema version
    pub version: i64,
    /// Unix seconds at which the run finished
    pub timestamp: i64,
    /// Outcome per lint name
    #[serde(rename = "lints")]
    pub results: BTreeMap<String, LintResult>,
    pub warnings_present: bool,
    pub errors_present: bool,
    pub fatals_present: bool,
}

/// Number of results per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub pass: usize,
    pub error: usize,
    pub warn: usize,
    pub fatal: usize,
    pub not_applicable: usize,
    pub not_effective: usize,
    pub reserved: usize,
}

impl ResultSummary {
    pub fn count(&self, status: LintStatus) -> usize {
        match status {
            LintStatus::Pass => self.pass,
            LintStatus::Error => self.error,
            LintStatus::Warn => self.warn,
            LintStatus::Fatal => self.fatal,
            LintStatus::NotApplicable => self.not_applicable,
            LintStatus::NotEffective => self.not_effective,
            LintStatus::Reserved => self.reserved,
        }
    }

    pub fn total(&self) -> usize {
        LintStatus::ALL.iter().map(|status| self.count(*status)).sum()
    }
}

impl ResultSet {
    /// Seal a finished run, stamping it with the current time
    pub fn new(version: i64, results: BTreeMap<String, LintResult>) -> Self {
        let has = |status: LintStatus| results.values().any(|result| result.status == status);
        let warnings_present = has(LintStatus::Warn);
        let errors_present = has(LintStatus::Error);
        let fatals_present = has(LintStatus::Fatal);

        Self {
            version,
            timestamp: Utc::now().timestamp(),
            results,
            warnings_present,
            errors_present,
            fatals_present,
        }
    }

    pub fn get(&self, name: &str) -> Option<&LintResult> {
        self.results.get(name)
    }

    pub fn status_of(&self, name: &str) -> Option<LintStatus> {
        self.get(name).map(|result| result.status)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();
        for result in self.results.values() {
            let slot = match result.status {
                LintStatus::Pass => &mut summary.pass,
                LintStatus::Error => &mut summary.error,
                LintStatus::Warn => &mut summary.warn,
                LintStatus::Fatal => &mut summary.fatal,
                LintStatus::NotApplicable => &mut summary.not_applicable,
                LintStatus::NotEffective => &mut summary.not_effective,
                LintStatus::Reserved => &mut summary.reserved,
            };
            *slot += 1;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        let mut results = BTreeMap::new();
        results.insert("e_a".to_string(), LintResult::pass());
        results.insert("e_b".to_string(), LintResult::error("bad"));
        results.insert("w_c".to_string(), LintResult::not_applicable());
        ResultSet::new(3, results)
    }

    #[test]
    fn test_flags() {
        let set = sample();
        assert!(set.errors_present);
        assert!(!set.warnings_present);
        assert!(!set.fatals_present);
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample().summary();
        assert_eq!(summary.pass, 1);
        assert_eq!(summary.count(LintStatus::Error), 1);
        assert_eq!(summary.not_applicable, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["version"], 3);
        assert!(value["timestamp"].as_i64().unwrap() > 0);
        assert_eq!(value["lints"]["e_b"]["result"], "error");
        assert_eq!(value["lints"]["e_b"]["details"], "bad");
        assert_eq!(value["lints"]["w_c"]["result"], "NA");
        assert_eq!(value["errors_present"], true);
    }
}
