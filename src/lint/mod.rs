// Lint module - Rule contract, descriptors, registry and the applicability resolver
//
// A lint is an independent compliance check over one artifact kind. Each lint is paired
// with an immutable `LintMetadata` descriptor at registration; the resolver decides per
// artifact whether the lint applies, whether it was in force, and only then runs it.

pub mod metadata;
pub mod registry;
pub mod resolver;
pub mod source;

use serde::{Deserialize, Serialize};

pub use metadata::{Effectiveness, LintMetadata, WindowSuccession};
pub use registry::{
    FilterOptions, LintRegistration, Lintable, RegisteredLint, Registry, global_registry,
};
pub use resolver::{install_panic_hook, resolve};
pub use source::LintSource;

/// Outcome of running one lint against one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LintStatus {
    /// Requirement met
    #[serde(rename = "pass")]
    Pass,
    /// Requirement violated
    #[serde(rename = "error")]
    Error,
    /// Advisory finding, not fatal to compliance
    #[serde(rename = "warn")]
    Warn,
    /// The lint implementation itself failed
    #[serde(rename = "fatal")]
    Fatal,
    /// The lint does not apply to this artifact
    #[serde(rename = "NA")]
    NotApplicable,
    /// The lint was not in force when the artifact was issued
    #[serde(rename = "NE")]
    NotEffective,
    /// Registered but evaluation withheld
    #[serde(rename = "reserved")]
    Reserved,
}

impl LintStatus {
    pub const ALL: [LintStatus; 7] = [
        LintStatus::Pass,
        LintStatus::Error,
        LintStatus::Warn,
        LintStatus::Fatal,
        LintStatus::NotApplicable,
        LintStatus::NotEffective,
        LintStatus::Reserved,
    ];

    /// Error or Fatal
    pub fn is_failure(&self) -> bool {
        matches!(self, LintStatus::Error | LintStatus::Fatal)
    }
}

impl std::fmt::Display for LintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintStatus::Pass => write!(f, "PASS"),
            LintStatus::Error => write!(f, "ERROR"),
            LintStatus::Warn => write!(f, "WARN"),
            LintStatus::Fatal => write!(f, "FATAL"),
            LintStatus::NotApplicable => write!(f, "N/A"),
            LintStatus::NotEffective => write!(f, "N/E"),
            LintStatus::Reserved => write!(f, "RESERVED"),
        }
    }
}

/// Status plus free-text details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    #[serde(rename = "result")]
    pub status: LintStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,
}

impl LintResult {
    pub fn new(status: LintStatus, details: impl Into<String>) -> Self {
        Self {
            status,
            details: details.into(),
        }
    }

    pub fn pass() -> Self {
        Self::new(LintStatus::Pass, String::new())
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self::new(LintStatus::Error, details)
    }

    pub fn warn(details: impl Into<String>) -> Self {
        Self::new(LintStatus::Warn, details)
    }

    pub fn fatal(details: impl Into<String>) -> Self {
        Self::new(LintStatus::Fatal, details)
    }

    pub fn not_applicable() -> Self {
        Self::new(LintStatus::NotApplicable, String::new())
    }

    pub fn not_effective(details: impl Into<String>) -> Self {
        Self::new(LintStatus::NotEffective, details)
    }

    pub fn reserved() -> Self {
        Self::new(LintStatus::Reserved, String::new())
    }
}

/// Contract every lint implements for its artifact kind
///
/// Both methods must be pure functions of the artifact. `execute` is only called
/// after `check_applies` returned true and the lint's effective window admits the
/// artifact, so it never needs to repeat those checks.
pub trait Lint<A>: Send + Sync {
    /// Whether the lint is structurally relevant to this artifact
    fn check_applies(&self, artifact: &A) -> bool;

    /// Evaluate the artifact; returns Pass, Error, Warn or Reserved
    fn execute(&self, artifact: &A) -> LintResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_status_display() {
        assert_eq!(LintStatus::Pass.to_string(), "PASS");
        assert_eq!(LintStatus::NotApplicable.to_string(), "N/A");
        assert_eq!(LintStatus::NotEffective.to_string(), "N/E");
    }

    #[test]
    fn test_lint_status_serialization() {
        assert_eq!(serde_json::to_string(&LintStatus::Pass).unwrap(), "\"pass\"");
        assert_eq!(
            serde_json::to_string(&LintStatus::NotApplicable).unwrap(),
            "\"NA\""
        );
        assert_eq!(
            serde_json::to_string(&LintStatus::NotEffective).unwrap(),
            "\"NE\""
        );
    }

    #[test]
    fn test_lint_result_omits_empty_details() {
        let json = serde_json::to_string(&LintResult::pass()).unwrap();
        assert_eq!(json, r#"{"result":"pass"}"#);

        let json = serde_json::to_string(&LintResult::error("bad")).unwrap();
        assert_eq!(json, r#"{"result":"error","details":"bad"}"#);
    }

    #[test]
    fn test_failure_statuses() {
        let failures: Vec<_> = LintStatus::ALL
            .iter()
            .filter(|status| status.is_failure())
            .collect();
        assert_eq!(failures, vec![&LintStatus::Error, &LintStatus::Fatal]);
    }
}
