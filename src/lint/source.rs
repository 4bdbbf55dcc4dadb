// Lint sources - Standards bodies and documents a lint is derived from

use crate::error::LintError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Originating standard of a lint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LintSource {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "RFC5280")]
    Rfc5280,
    #[serde(rename = "RFC5480")]
    Rfc5480,
    #[serde(rename = "RFC5891")]
    Rfc5891,
    #[serde(rename = "RFC6960")]
    Rfc6960,
    #[serde(rename = "CABF_BR")]
    CabfBaselineRequirements,
    #[serde(rename = "CABF_EV")]
    CabfEvGuidelines,
    #[serde(rename = "CABF_SMIME_BR")]
    CabfSmimeBaselineRequirements,
    #[serde(rename = "CABF_CS_BR")]
    CabfCsBaselineRequirements,
    #[serde(rename = "Mozilla")]
    MozillaRootStorePolicy,
    #[serde(rename = "Apple")]
    AppleRootStorePolicy,
    #[serde(rename = "Community")]
    Community,
    #[serde(rename = "ETSI_ESI")]
    EtsiEsi,
}

impl LintSource {
    pub const ALL: [LintSource; 13] = [
        LintSource::Unknown,
        LintSource::Rfc5280,
        LintSource::Rfc5480,
        LintSource::Rfc5891,
        LintSource::Rfc6960,
        LintSource::CabfBaselineRequirements,
        LintSource::CabfEvGuidelines,
        LintSource::CabfSmimeBaselineRequirements,
        LintSource::CabfCsBaselineRequirements,
        LintSource::MozillaRootStorePolicy,
        LintSource::AppleRootStorePolicy,
        LintSource::Community,
        LintSource::EtsiEsi,
    ];

    /// Stable identifier used in JSON output and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            LintSource::Unknown => "Unknown",
            LintSource::Rfc5280 => "RFC5280",
            LintSource::Rfc5480 => "RFC5480",
            LintSource::Rfc5891 => "RFC5891",
            LintSource::Rfc6960 => "RFC6960",
            LintSource::CabfBaselineRequirements => "CABF_BR",
            LintSource::CabfEvGuidelines => "CABF_EV",
            LintSource::CabfSmimeBaselineRequirements => "CABF_SMIME_BR",
            LintSource::CabfCsBaselineRequirements => "CABF_CS_BR",
            LintSource::MozillaRootStorePolicy => "Mozilla",
            LintSource::AppleRootStorePolicy => "Apple",
            LintSource::Community => "Community",
            LintSource::EtsiEsi => "ETSI_ESI",
        }
    }
}

impl std::fmt::Display for LintSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for LintSource {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LintSource::ALL
            .iter()
            .find(|source| source.id().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| LintError::UnknownLintSource {
                source_id: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for source in LintSource::ALL {
            assert_eq!(source.id().parse::<LintSource>().unwrap(), source);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "etsi_esi".parse::<LintSource>().unwrap(),
            LintSource::EtsiEsi
        );
    }

    #[test]
    fn test_unknown_source() {
        let err = "CABF_XYZ".parse::<LintSource>().unwrap_err();
        assert!(err.to_string().contains("CABF_XYZ"));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&LintSource::CabfCsBaselineRequirements).unwrap();
        assert_eq!(json, "\"CABF_CS_BR\"");
    }
}
