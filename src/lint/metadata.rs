// Lint metadata - Identity and effective window of a registered lint

use crate::error::LintError;
use crate::lint::LintSource;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Immutable descriptor attached to a lint at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMetadata {
    /// Unique, stable lint name (e.g., "e_duplicate_qcstatement")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Section of the originating document
    pub citation: String,
    pub source: LintSource,
    /// First instant the lint is in force (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
    /// First instant the lint is no longer in force (exclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ineffective_date: Option<DateTime<Utc>>,
}

/// Where a reference time falls relative to a lint's effective window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Effective,
    /// Before the effective date
    NotYetEffective,
    /// On or after the ineffective date
    Superseded,
}

/// How a successor lint's window lines up with its predecessor's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSuccession {
    /// Predecessor ends exactly where the successor starts
    Contiguous,
    /// Artifacts issued in this span are covered by neither lint
    Gap(TimeDelta),
    /// Artifacts issued in this span are covered by both lints
    Overlap(TimeDelta),
    /// Predecessor never ends or successor never starts
    Unbounded,
}

impl LintMetadata {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        citation: impl Into<String>,
        source: LintSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            citation: citation.into(),
            source,
            effective_date: None,
            ineffective_date: None,
        }
    }

    pub fn effective_from(mut self, date: DateTime<Utc>) -> Self {
        self.effective_date = Some(date);
        self
    }

    pub fn effective_until(mut self, date: DateTime<Utc>) -> Self {
        self.ineffective_date = Some(date);
        self
    }

    /// Reject empty or inverted windows
    pub fn validate(&self) -> Result<(), LintError> {
        if let (Some(effective), Some(ineffective)) = (self.effective_date, self.ineffective_date)
            && effective >= ineffective
        {
            return Err(LintError::InvalidEffectiveWindow {
                name: self.name.clone(),
                effective,
                ineffective,
            });
        }
        Ok(())
    }

    pub fn effectiveness(&self, at: DateTime<Utc>) -> Effectiveness {
        if let Some(effective) = self.effective_date
            && at < effective
        {
            return Effectiveness::NotYetEffective;
        }
        if let Some(ineffective) = self.ineffective_date
            && at >= ineffective
        {
            return Effectiveness::Superseded;
        }
        Effectiveness::Effective
    }

    pub fn is_effective_at(&self, at: DateTime<Utc>) -> bool {
        self.effectiveness(at) == Effectiveness::Effective
    }

    /// Compare this lint's window with the lint meant to replace it
    pub fn succession(&self, successor: &LintMetadata) -> WindowSuccession {
        match (self.ineffective_date, successor.effective_date) {
            (Some(end), Some(start)) if end == start => WindowSuccession::Contiguous,
            (Some(end), Some(start)) if end < start => WindowSuccession::Gap(start - end),
            (Some(end), Some(start)) => WindowSuccession::Overlap(end - start),
            _ => WindowSuccession::Unbounded,
        }
    }
}
