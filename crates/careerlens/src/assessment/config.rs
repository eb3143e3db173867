use serde::{Deserialize, Serialize};

use super::consistency::ConsistencyTableVersion;
use super::riasec::RiasecTransform;

/// Pinned scoring constants that differ between historical versions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub riasec_scale: f64,
    pub consistency_table: ConsistencyTableVersion,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            riasec_scale: RiasecTransform::DEFAULT_SCALE,
            consistency_table: ConsistencyTableVersion::Current,
        }
    }
}
