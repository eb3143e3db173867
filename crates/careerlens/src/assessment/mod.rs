//! Big Five scoring: raw aggregation, standardization, consistency checks,
//! nuanced insights, and the RIASEC transform.

pub mod config;
pub mod consistency;
pub mod domain;
pub mod insights;
pub mod items;
pub mod norms;
mod report;
pub mod riasec;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;
pub use consistency::{ConsistencyFlag, ConsistencyTable, ConsistencyTableVersion, Severity};
pub use domain::{
    AnswerError, Domain, FacetKey, Item, Keying, Level, ScoreResult, UserAnswers,
    NEUTRAL_ANSWER,
};
pub use insights::{InsightTable, NuancedInsight};
pub use norms::{Norm, NormTable, NormTableError, ScoreKey};
pub use report::{AssessmentReport, BigFiveScorer};
pub use riasec::{HollandCode, Interest, RiasecProfile, RiasecTransform};
pub use session::{AssessmentKind, AssessmentSession, SessionError, SessionProgress};
