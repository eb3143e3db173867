use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{Career, CareerCatalog};
use super::filters::RiskFlags;
use super::matching::{alignment_score, blend, MatchTarget};
use crate::assessment::riasec::HollandCode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    #[default]
    Top,
    Bottom,
}

impl Band {
    pub const fn label(self) -> &'static str {
        match self {
            Band::Top => "top",
            Band::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Band {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Band::Top),
            "bottom" => Ok(Band::Bottom),
            other => Err(format!("unknown band '{other}' (expected top or bottom)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    pub risk_flags: RiskFlags,
    pub current_career: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub title: String,
    pub code: HollandCode,
    pub zone: u8,
    pub match_score: u8,
    pub personality_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_score: Option<u8>,
}

/// Scores a read-only catalog against a match target.
#[derive(Debug, Clone)]
pub struct CareerMatcher {
    catalog: CareerCatalog,
}

impl CareerMatcher {
    pub fn new(catalog: CareerCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Exact case-insensitive title first, then a substring match either way.
    pub fn find_career(&self, title: &str) -> Option<&Career> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.catalog
            .iter()
            .find(|career| career.title.to_lowercase() == needle)
            .or_else(|| {
                self.catalog.iter().find(|career| {
                    let candidate = career.title.to_lowercase();
                    candidate.contains(&needle) || needle.contains(&candidate)
                })
            })
    }

    /// Every surviving career, highest score first. Equal scores keep catalog order.
    pub fn rank(&self, target: &MatchTarget, options: &RankOptions) -> Vec<ScoredCareer> {
        let current_code = options
            .current_career
            .as_deref()
            .and_then(|title| self.resolve_current(title));

        let mut scored: Vec<ScoredCareer> = self
            .catalog
            .iter()
            .filter(|career| {
                let excluded = options.risk_flags.excludes(&career.title);
                if excluded {
                    debug!(title = %career.title, "career removed by risk flags");
                }
                !excluded
            })
            .map(|career| score_career(career, target, current_code))
            .collect();

        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored
    }

    pub fn top(
        &self,
        target: &MatchTarget,
        options: &RankOptions,
        limit: usize,
    ) -> Vec<ScoredCareer> {
        let mut ranked = self.rank(target, options);
        ranked.truncate(limit);
        ranked
    }

    /// Lowest-scoring slice of the ranking, reordered ascending.
    pub fn bottom(
        &self,
        target: &MatchTarget,
        options: &RankOptions,
        limit: usize,
    ) -> Vec<ScoredCareer> {
        let mut ranked = self.rank(target, options);
        let start = ranked.len().saturating_sub(limit);
        let mut slice = ranked.split_off(start);
        slice.sort_by(|a, b| a.match_score.cmp(&b.match_score));
        slice
    }

    pub fn band(
        &self,
        target: &MatchTarget,
        options: &RankOptions,
        band: Band,
        limit: usize,
    ) -> Vec<ScoredCareer> {
        match band {
            Band::Top => self.top(target, options, limit),
            Band::Bottom => self.bottom(target, options, limit),
        }
    }

    fn resolve_current(&self, title: &str) -> Option<&HollandCode> {
        match self.find_career(title) {
            Some(career) if !career.code.is_empty() => Some(&career.code),
            Some(career) => {
                debug!(title = %career.title, "current career has no code; skipping alignment");
                None
            }
            None => {
                debug!(title, "current career not found in catalog; skipping alignment");
                None
            }
        }
    }
}

impl Default for CareerMatcher {
    fn default() -> Self {
        Self::new(CareerCatalog::standard())
    }
}

fn score_career(
    career: &Career,
    target: &MatchTarget,
    current_code: Option<&HollandCode>,
) -> ScoredCareer {
    let personality_score = target.score(&career.code);
    let alignment = current_code.map(|current| alignment_score(&career.code, current));
    let match_score = match alignment {
        Some(alignment) => blend(personality_score, alignment),
        None => personality_score,
    };

    ScoredCareer {
        title: career.title.clone(),
        code: career.code.clone(),
        zone: career.zone,
        match_score,
        personality_score,
        alignment_score: alignment,
    }
}
