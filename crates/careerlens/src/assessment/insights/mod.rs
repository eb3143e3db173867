//! Nuanced per-domain narratives.
//!
//! Each domain starts from a level-based default text. Override rules are
//! plain records evaluated in table order; the first rule for a domain whose
//! facet condition holds replaces the default.

mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Domain, FacetKey, Level, ScoreResult};

/// Percentile assumed for any facet missing from the results.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Predicate over facet percentiles. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetCondition {
    Above(FacetKey, u8),
    Below(FacetKey, u8),
    All(&'static [FacetCondition]),
    Any(&'static [FacetCondition]),
}

impl FacetCondition {
    pub fn holds(&self, facets: &BTreeMap<FacetKey, ScoreResult>) -> bool {
        match self {
            Self::Above(key, threshold) => facet_percentile(facets, *key) > *threshold,
            Self::Below(key, threshold) => facet_percentile(facets, *key) < *threshold,
            Self::All(conditions) => conditions.iter().all(|condition| condition.holds(facets)),
            Self::Any(conditions) => conditions.iter().any(|condition| condition.holds(facets)),
        }
    }
}

fn facet_percentile(facets: &BTreeMap<FacetKey, ScoreResult>, key: FacetKey) -> u8 {
    facets
        .get(&key)
        .map(|result| result.percentile)
        .unwrap_or(NEUTRAL_PERCENTILE)
}

/// A named pattern that overrides the default narrative for its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightRule {
    pub domain: Domain,
    pub pattern: &'static str,
    pub condition: FacetCondition,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultInsight {
    pub domain: Domain,
    pub level: Level,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuancedInsight {
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTable {
    defaults: Vec<DefaultInsight>,
    rules: Vec<InsightRule>,
}

impl InsightTable {
    pub fn new(defaults: Vec<DefaultInsight>, rules: Vec<InsightRule>) -> Self {
        Self { defaults, rules }
    }

    pub fn standard() -> Self {
        Self::new(rules::DEFAULTS.to_vec(), rules::OVERRIDES.to_vec())
    }

    pub fn rules(&self) -> &[InsightRule] {
        &self.rules
    }

    pub fn default_text(&self, domain: Domain, level: Level) -> &'static str {
        self.defaults
            .iter()
            .find(|entry| entry.domain == domain && entry.level == level)
            .map(|entry| entry.text)
            .unwrap_or("")
    }

    /// One insight per domain in canonical order.
    pub fn generate(
        &self,
        domains: &BTreeMap<Domain, ScoreResult>,
        facets: &BTreeMap<FacetKey, ScoreResult>,
    ) -> BTreeMap<Domain, NuancedInsight> {
        Domain::ordered()
            .into_iter()
            .map(|domain| {
                let level = domains
                    .get(&domain)
                    .map(|result| result.level)
                    .unwrap_or(Level::Average);

                let matched = self
                    .rules
                    .iter()
                    .filter(|rule| rule.domain == domain)
                    .find(|rule| rule.condition.holds(facets));

                let insight = match matched {
                    Some(rule) => NuancedInsight {
                        level,
                        pattern: Some(rule.pattern.to_string()),
                        text: rule.text.to_string(),
                    },
                    None => NuancedInsight {
                        level,
                        pattern: None,
                        text: self.default_text(domain, level).to_string(),
                    },
                };

                (domain, insight)
            })
            .collect()
    }
}

impl Default for InsightTable {
    fn default() -> Self {
        Self::standard()
    }
}
