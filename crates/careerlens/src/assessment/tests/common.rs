use std::collections::BTreeMap;

use crate::assessment::domain::{
    Domain, FacetKey, Keying, Level, ScoreResult, UserAnswers, NEUTRAL_ANSWER,
};
use crate::assessment::items::IPIP_NEO_120;
use crate::assessment::norms::{Norm, NormTable, ScoreKey};
use crate::assessment::{BigFiveScorer, ScoringConfig};

/// Norms centered on the all-neutral raw sums: 72 per domain, 12 per facet.
pub(super) fn symmetric_norms() -> NormTable {
    let mut table = NormTable::new();
    for domain in Domain::ordered() {
        table.insert(ScoreKey::Domain(domain), Norm::new(72.0, 10.0));
    }
    for facet in FacetKey::all() {
        table.insert(ScoreKey::Facet(facet), Norm::new(12.0, 3.0));
    }
    table
}

pub(super) fn symmetric_scorer() -> BigFiveScorer {
    BigFiveScorer::new(ScoringConfig::default()).with_norms(symmetric_norms())
}

pub(super) fn neutral_answers() -> UserAnswers {
    let mut answers = UserAnswers::new();
    for item in IPIP_NEO_120.iter() {
        answers
            .insert(item.id, i64::from(NEUTRAL_ANSWER))
            .expect("neutral answer is valid");
    }
    answers
}

pub(super) fn answers_with(pairs: &[(&str, i64)]) -> UserAnswers {
    let mut answers = UserAnswers::new();
    for (item_id, value) in pairs {
        answers.insert(*item_id, *value).expect("fixture answer is valid");
    }
    answers
}

/// Answer every item of the facet so its keyed score equals `keyed_value`.
pub(super) fn push_facet(answers: &mut UserAnswers, facet: FacetKey, keyed_value: u8) {
    for item in IPIP_NEO_120.iter().filter(|item| item.facet_key() == facet) {
        let raw = match item.keyed {
            Keying::Positive => keyed_value,
            Keying::Negative => 6 - keyed_value,
        };
        answers
            .insert(item.id, i64::from(raw))
            .expect("fixture answer is valid");
    }
}

pub(super) fn facet_results(entries: &[(FacetKey, u8)]) -> BTreeMap<FacetKey, ScoreResult> {
    entries
        .iter()
        .map(|(key, percentile)| {
            (
                *key,
                ScoreResult {
                    raw: 0,
                    z_score: 0.0,
                    percentile: *percentile,
                    level: Level::from_percentile(*percentile),
                },
            )
        })
        .collect()
}

pub(super) fn domain_results(level: Level) -> BTreeMap<Domain, ScoreResult> {
    Domain::ordered()
        .into_iter()
        .map(|domain| {
            (
                domain,
                ScoreResult {
                    raw: 72,
                    z_score: 0.0,
                    percentile: 50,
                    level,
                },
            )
        })
        .collect()
}
