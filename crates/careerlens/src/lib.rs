//! Questionnaire scoring and career matching.
//!
//! The Big Five pipeline runs raw aggregation, standardization, consistency
//! checks, nuanced insights, and the RIASEC transform over a set of answers.
//! The MBTI instrument is scored independently. Either result can be fed into
//! the career matcher to rank a catalog of occupations.

pub mod assessment;
pub mod careers;
pub mod config;
pub mod error;
pub mod http;
pub mod mbti;
pub mod telemetry;
