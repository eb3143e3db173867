use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::riasec::{HollandCode, Interest};

/// Positional weights for primary, secondary and tertiary letters.
pub const POSITION_WEIGHTS: [u32; 3] = [3, 2, 1];

const PRIMARY_MATCH: u32 = 50;
const SECONDARY_MATCH: u32 = 25;
const PRIMARY_ANYWHERE: u32 = 10;
const PAIR_MATCH: u32 = 15;

const ALIGNMENT_POINTS: [u32; 3] = [50, 30, 20];
const ALIGNMENT_SHARED_BONUS: u32 = 10;

const PERSONALITY_SHARE: f64 = 0.6;
const ALIGNMENT_SHARE: f64 = 0.4;

const MAX_SCORE: u32 = 100;

/// What a career is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTarget {
    /// Letter code from a legacy report or an MBTI profile.
    Code(HollandCode),
    /// Interest percentiles from a Big Five report.
    Percentiles(BTreeMap<Interest, u8>),
}

impl MatchTarget {
    pub fn score(&self, career: &HollandCode) -> u8 {
        match self {
            MatchTarget::Code(user) => string_mode_score(user, career),
            MatchTarget::Percentiles(scores) => percentile_mode_score(scores, career),
        }
    }
}

/// Point table over the first two letters, capped at 100.
pub fn string_mode_score(user: &HollandCode, career: &HollandCode) -> u8 {
    let mut points = 0;
    let career_primary = career.primary();

    if career_primary.is_some() && user.primary() == career_primary {
        points += PRIMARY_MATCH;
    }
    if let Some(secondary) = user.secondary() {
        if Some(secondary) == career_primary || Some(secondary) == career.secondary() {
            points += SECONDARY_MATCH;
        }
    }
    if career_primary.is_some_and(|primary| user.contains(primary)) {
        points += PRIMARY_ANYWHERE;
    }
    if user.len() >= 2 && career.len() >= 2 && user.letters()[..2] == career.letters()[..2] {
        points += PAIR_MATCH;
    }

    capped(points)
}

/// Weighted mean of the user's percentiles over the career's letters.
///
/// Only the weights of letters actually present are used as the divisor, so
/// one- and two-letter codes are not penalized. An empty code scores 0.
pub fn percentile_mode_score(scores: &BTreeMap<Interest, u8>, career: &HollandCode) -> u8 {
    let (weighted, weights) = career
        .letters()
        .iter()
        .zip(POSITION_WEIGHTS)
        .fold((0u32, 0u32), |(weighted, weights), (interest, weight)| {
            let percentile = u32::from(scores.get(interest).copied().unwrap_or(0));
            (weighted + weight * percentile, weights + weight)
        });

    if weights == 0 {
        return 0;
    }
    rounded(f64::from(weighted) / f64::from(weights))
}

/// Positional agreement between a candidate career and the user's current one.
pub fn alignment_score(career: &HollandCode, current: &HollandCode) -> u8 {
    let mut points: u32 = ALIGNMENT_POINTS
        .iter()
        .enumerate()
        .filter(|(position, _)| {
            career
                .get(*position)
                .is_some_and(|letter| current.get(*position) == Some(letter))
        })
        .map(|(_, points)| *points)
        .sum();

    if career.letters().iter().any(|letter| current.contains(*letter)) {
        points += ALIGNMENT_SHARED_BONUS;
    }

    capped(points)
}

/// 60% personality fit, 40% alignment with the current career.
pub fn blend(personality: u8, alignment: u8) -> u8 {
    rounded(PERSONALITY_SHARE * f64::from(personality) + ALIGNMENT_SHARE * f64::from(alignment))
}

fn capped(points: u32) -> u8 {
    points.min(MAX_SCORE) as u8
}

fn rounded(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(letters: &str) -> HollandCode {
        letters.parse().expect("valid code")
    }

    fn percentiles(values: [u8; 6]) -> BTreeMap<Interest, u8> {
        Interest::ordered().into_iter().zip(values).collect()
    }

    #[test]
    fn string_mode_follows_the_point_table() {
        assert_eq!(string_mode_score(&code("SAI"), &code("SAE")), 100);
        // primary match, primary anywhere
        assert_eq!(string_mode_score(&code("SAI"), &code("SIR")), 60);
        // user secondary A is career primary, career primary A is in user code
        assert_eq!(string_mode_score(&code("SAI"), &code("AER")), 35);
        // only the career primary I appears in the user code
        assert_eq!(string_mode_score(&code("SAI"), &code("IRC")), 10);
        assert_eq!(string_mode_score(&code("SAI"), &code("REC")), 0);
    }

    #[test]
    fn string_mode_handles_short_codes() {
        assert_eq!(string_mode_score(&code("S"), &code("SA")), 60);
        assert_eq!(string_mode_score(&code("SAI"), &code("")), 0);
        assert_eq!(string_mode_score(&code(""), &code("SAE")), 0);
    }

    #[test]
    fn percentile_mode_weights_by_position() {
        let realistic_only = percentiles([100, 0, 0, 0, 0, 0]);
        assert_eq!(percentile_mode_score(&realistic_only, &code("RIA")), 50);

        let mixed = percentiles([80, 60, 40, 20, 10, 0]);
        // (80*3 + 60*2 + 40*1) / 6 = 66.67
        assert_eq!(percentile_mode_score(&mixed, &code("RIA")), 67);
    }

    #[test]
    fn percentile_mode_normalizes_short_codes() {
        let scores = percentiles([90, 30, 0, 0, 0, 0]);
        assert_eq!(percentile_mode_score(&scores, &code("R")), 90);
        // (90*3 + 30*2) / 5 = 66
        assert_eq!(percentile_mode_score(&scores, &code("RI")), 66);
        assert_eq!(percentile_mode_score(&scores, &code("")), 0);
        assert_eq!(percentile_mode_score(&BTreeMap::new(), &code("SAE")), 0);
    }

    #[test]
    fn alignment_rewards_positions_and_shared_letters() {
        assert_eq!(alignment_score(&code("SAE"), &code("SAE")), 100);
        assert_eq!(alignment_score(&code("SAE"), &code("SIR")), 60);
        assert_eq!(alignment_score(&code("SAE"), &code("ESA")), 10);
        assert_eq!(alignment_score(&code("RIC"), &code("SAE")), 0);
    }

    #[test]
    fn blend_weights_personality_over_alignment() {
        assert_eq!(blend(80, 60), 72);
        assert_eq!(blend(100, 0), 60);
        assert_eq!(blend(0, 100), 40);
        assert_eq!(blend(55, 10), 37);
    }

    #[test]
    fn match_target_dispatches_on_mode() {
        let by_code = MatchTarget::Code(code("SAI"));
        assert_eq!(by_code.score(&code("SAE")), 100);

        let by_percentile = MatchTarget::Percentiles(percentiles([100, 0, 0, 0, 0, 0]));
        assert_eq!(by_percentile.score(&code("RIA")), 50);
    }
}
