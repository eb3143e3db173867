mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::UserAnswers;

/// Threshold a single raw answer must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerCondition {
    AtLeast(u8),
}

impl AnswerCondition {
    pub const fn holds(self, answer: u8) -> bool {
        match self {
            Self::AtLeast(min) => answer >= min,
        }
    }
}

/// Every contradiction currently reported is high severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
        }
    }
}

/// A pair of items whose joint answers contradict each other.
///
/// Conditions apply to raw answers, before any reverse keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsistencyCheck {
    pub item_a: &'static str,
    pub when_a: AnswerCondition,
    pub item_b: &'static str,
    pub when_b: AnswerCondition,
    pub title: Option<&'static str>,
    pub message: &'static str,
    pub severity: Severity,
}

impl ConsistencyCheck {
    fn evaluate(&self, answers: &UserAnswers) -> Option<ConsistencyFlag> {
        let a = answers.get(self.item_a)?;
        let b = answers.get(self.item_b)?;

        if self.when_a.holds(a) && self.when_b.holds(b) {
            Some(ConsistencyFlag {
                item1_id: self.item_a.to_string(),
                item2_id: self.item_b.to_string(),
                message: self.message.to_string(),
                title: self.title.map(str::to_string),
                severity: self.severity,
            })
        } else {
            None
        }
    }
}

/// A detected contradiction, produced fresh on every scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyFlag {
    pub item1_id: String,
    pub item2_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub severity: Severity,
}

/// Which of the two historical check tables to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyTableVersion {
    #[default]
    Current,
    Legacy,
}

impl ConsistencyTableVersion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ConsistencyTableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConsistencyTableVersion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "current" | "v2" => Ok(Self::Current),
            "legacy" | "v1" => Ok(Self::Legacy),
            other => Err(other.to_string()),
        }
    }
}

/// Ordered list of checks evaluated by [`ConsistencyTable::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyTable {
    checks: Vec<ConsistencyCheck>,
}

impl ConsistencyTable {
    pub fn new(checks: Vec<ConsistencyCheck>) -> Self {
        Self { checks }
    }

    pub fn for_version(version: ConsistencyTableVersion) -> Self {
        match version {
            ConsistencyTableVersion::Current => Self::new(tables::CURRENT.to_vec()),
            ConsistencyTableVersion::Legacy => Self::new(tables::LEGACY.to_vec()),
        }
    }

    pub fn checks(&self) -> &[ConsistencyCheck] {
        &self.checks
    }

    /// Flags in table order. Checks touching an unanswered item are skipped.
    pub fn check(&self, answers: &UserAnswers) -> Vec<ConsistencyFlag> {
        self.checks
            .iter()
            .filter_map(|check| check.evaluate(answers))
            .collect()
    }
}

impl Default for ConsistencyTable {
    fn default() -> Self {
        Self::for_version(ConsistencyTableVersion::default())
    }
}
