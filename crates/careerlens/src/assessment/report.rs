use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::ScoringConfig;
use super::consistency::{ConsistencyFlag, ConsistencyTable};
use super::domain::{Domain, FacetKey, Item, ScoreResult, UserAnswers};
use super::insights::{InsightTable, NuancedInsight};
use super::items::IPIP_NEO_120;
use super::norms::NormTable;
use super::riasec::{HollandCode, RiasecProfile, RiasecTransform};
use super::scoring::{aggregate_raw, standardize_all};

/// Everything one Big Five scoring run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub domains: BTreeMap<Domain, ScoreResult>,
    pub facets: BTreeMap<FacetKey, ScoreResult>,
    pub riasec: RiasecProfile,
    pub insights: BTreeMap<Domain, NuancedInsight>,
    pub consistency_flags: Vec<ConsistencyFlag>,
}

impl AssessmentReport {
    pub fn top_riasec(&self) -> &HollandCode {
        &self.riasec.top_code
    }

    pub fn facet_percentile(&self, key: FacetKey) -> Option<u8> {
        self.facets.get(&key).map(|result| result.percentile)
    }

    pub fn has_flag_titled(&self, title: &str) -> bool {
        self.consistency_flags
            .iter()
            .any(|flag| flag.title.as_deref() == Some(title))
    }
}

/// Stateless scorer over read-only tables; safe to share across requests.
#[derive(Debug, Clone)]
pub struct BigFiveScorer {
    items: &'static [Item],
    norms: NormTable,
    consistency: ConsistencyTable,
    insights: InsightTable,
    riasec: RiasecTransform,
}

impl BigFiveScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            items: &IPIP_NEO_120,
            norms: NormTable::ipip_neo_120(),
            consistency: ConsistencyTable::for_version(config.consistency_table),
            insights: InsightTable::standard(),
            riasec: RiasecTransform::new(config.riasec_scale),
        }
    }

    pub fn with_norms(mut self, norms: NormTable) -> Self {
        self.norms = norms;
        self
    }

    pub fn with_items(mut self, items: &'static [Item]) -> Self {
        self.items = items;
        self
    }

    pub fn with_consistency_table(mut self, table: ConsistencyTable) -> Self {
        self.consistency = table;
        self
    }

    pub fn with_insights(mut self, insights: InsightTable) -> Self {
        self.insights = insights;
        self
    }

    pub fn items(&self) -> &'static [Item] {
        self.items
    }

    pub fn norms(&self) -> &NormTable {
        &self.norms
    }

    pub fn score(&self, answers: &UserAnswers) -> AssessmentReport {
        let totals = aggregate_raw(answers, self.items);
        let scores = standardize_all(&totals, &self.norms);

        let riasec = self.riasec.transform(&scores.domains);
        let insights = self.insights.generate(&scores.domains, &scores.facets);
        let consistency_flags = self.consistency.check(answers);

        debug!(
            answered = answers.len(),
            items = self.items.len(),
            top_riasec = %riasec.top_code,
            flags = consistency_flags.len(),
            "big five scoring run complete"
        );

        AssessmentReport {
            domains: scores.domains,
            facets: scores.facets,
            riasec,
            insights,
            consistency_flags,
        }
    }
}

impl Default for BigFiveScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
