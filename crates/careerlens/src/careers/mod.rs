//! Career catalog and ranking against a derived interest code.

pub mod catalog;
pub mod filters;
pub mod matching;
pub mod ranking;

pub use catalog::{Career, CareerCatalog, CatalogImportError};
pub use filters::RiskFlags;
pub use matching::{alignment_score, blend, percentile_mode_score, string_mode_score, MatchTarget};
pub use ranking::{Band, CareerMatcher, RankOptions, ScoredCareer};
