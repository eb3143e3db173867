use std::collections::BTreeMap;

use super::domain::{Domain, FacetKey, Item, Level, ScoreResult, UserAnswers};
use super::norms::{Norm, NormTable, ScoreKey};

/// Reverse-keyed answer sums per domain and per facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTotals {
    pub domains: BTreeMap<Domain, u32>,
    pub facets: BTreeMap<FacetKey, u32>,
}

/// Sum every item's keyed answer into its domain and facet totals.
///
/// Unanswered items count as the neutral midpoint.
pub fn aggregate_raw(answers: &UserAnswers, items: &[Item]) -> RawTotals {
    let mut totals = RawTotals::default();

    for item in items {
        let answer = answers.answer_or_neutral(item.id);
        let scored = u32::from(item.keyed.apply(answer));

        *totals.domains.entry(item.domain).or_insert(0) += scored;
        *totals.facets.entry(item.facet_key()).or_insert(0) += scored;
    }

    totals
}

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Abramowitz-Stegun 7.1.26 approximation of the error function.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal CDF built on [`erf`].
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// `round(100 * cdf(z))`, kept inside `0..=100`.
pub fn percentile_from_z(z: f64) -> u8 {
    (100.0 * normal_cdf(z)).round().clamp(0.0, 100.0) as u8
}

pub fn z_score(raw: f64, norm: Norm) -> f64 {
    if norm.sd == 0.0 {
        0.0
    } else {
        (raw - norm.mean) / norm.sd
    }
}

pub fn standardize(raw: u32, norm: Norm) -> ScoreResult {
    let z_score = z_score(f64::from(raw), norm);
    let percentile = percentile_from_z(z_score);

    ScoreResult {
        raw,
        z_score,
        percentile,
        level: Level::from_percentile(percentile),
    }
}

/// Standardized domain and facet results for one scoring run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardScores {
    pub domains: BTreeMap<Domain, ScoreResult>,
    pub facets: BTreeMap<FacetKey, ScoreResult>,
}

pub fn standardize_all(totals: &RawTotals, norms: &NormTable) -> StandardScores {
    let domains = totals
        .domains
        .iter()
        .map(|(domain, raw)| {
            let norm = norms.get(ScoreKey::Domain(*domain));
            (*domain, standardize(*raw, norm))
        })
        .collect();

    let facets = totals
        .facets
        .iter()
        .map(|(facet, raw)| {
            let norm = norms.get(ScoreKey::Facet(*facet));
            (*facet, standardize(*raw, norm))
        })
        .collect();

    StandardScores { domains, facets }
}
