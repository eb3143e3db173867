use std::io::Cursor;

use careerlens::assessment::items::IPIP_NEO_120;
use careerlens::assessment::scoring::percentile_from_z;
use careerlens::assessment::{
    AssessmentKind, AssessmentSession, BigFiveScorer, Domain, FacetKey, Keying, Level,
    NormTable, ScoringConfig,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Map, Value};

fn symmetric_norms_json() -> String {
    let mut entries = Map::new();
    for domain in Domain::ordered() {
        entries.insert(domain.letter().to_string(), json!({ "mean": 72.0, "sd": 10.0 }));
    }
    for facet in FacetKey::all() {
        entries.insert(facet.to_string(), json!({ "mean": 12.0, "sd": 3.0 }));
    }
    Value::Object(entries).to_string()
}

fn symmetric_scorer() -> BigFiveScorer {
    let norms = NormTable::from_json_reader(Cursor::new(symmetric_norms_json()))
        .expect("norm json parses");
    assert_eq!(norms.len(), 35);
    BigFiveScorer::new(ScoringConfig::default()).with_norms(norms)
}

fn started() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[test]
fn completed_neutral_session_scores_at_the_median() {
    let mut session = AssessmentSession::new(AssessmentKind::BigFive, started());
    for item in IPIP_NEO_120.iter() {
        session.record(item.id, 3).expect("neutral answer accepted");
    }
    assert_eq!(session.progress().percent(), 100);
    session.complete(started()).expect("session completes");

    let report = symmetric_scorer().score(&session.answers);

    for result in report.domains.values().chain(report.facets.values()) {
        assert_eq!(result.percentile, 50);
        assert_eq!(result.level, Level::Average);
    }
    assert!(report.consistency_flags.is_empty());
    assert!(report.riasec.scores.values().all(|score| *score == 50));
    assert_eq!(report.top_riasec().to_string(), "RIA");
}

#[test]
fn reverse_keyed_answers_mirror_around_the_midpoint() {
    for answer in 1..=5u8 {
        assert_eq!(
            Keying::Negative.apply(answer) + Keying::Negative.apply(6 - answer),
            6
        );
        assert_eq!(Keying::Positive.apply(answer), answer);
    }
}

#[test]
fn percentile_is_monotone_and_levels_split_at_thirty_and_seventy() {
    let mut previous = 0;
    for step in -400..=400 {
        let percentile = percentile_from_z(f64::from(step) / 100.0);
        assert!(percentile >= previous, "dropped at z = {}", step);
        previous = percentile;
    }
    assert_eq!(percentile_from_z(0.0), 50);

    assert_eq!(Level::from_percentile(29), Level::Low);
    assert_eq!(Level::from_percentile(30), Level::Average);
    assert_eq!(Level::from_percentile(70), Level::Average);
    assert_eq!(Level::from_percentile(71), Level::High);
}

#[test]
fn riasec_scale_changes_interest_percentiles_but_not_domains() {
    let mut answers = careerlens::assessment::UserAnswers::new();
    for item in IPIP_NEO_120
        .iter()
        .filter(|item| item.domain == Domain::Openness)
    {
        let answer = match item.keyed {
            Keying::Positive => 4,
            Keying::Negative => 2,
        };
        answers.insert(item.id, answer).expect("valid answer");
    }

    let norms = NormTable::from_json_reader(Cursor::new(symmetric_norms_json()))
        .expect("norm json parses");
    let unscaled = BigFiveScorer::new(ScoringConfig {
        riasec_scale: 1.0,
        ..ScoringConfig::default()
    })
    .with_norms(norms.clone())
    .score(&answers);
    let scaled = BigFiveScorer::new(ScoringConfig::default())
        .with_norms(norms)
        .score(&answers);

    assert_eq!(unscaled.domains, scaled.domains);
    // Openness z = (96 - 72) / 10 = 2.4; Artistic weight 0.7
    let artistic = careerlens::assessment::Interest::Artistic;
    assert_eq!(unscaled.riasec.scores[&artistic], percentile_from_z(0.7 * 2.4));
    assert_eq!(scaled.riasec.scores[&artistic], percentile_from_z(0.7 * 2.4 * 1.5));
    assert!(scaled.riasec.scores[&artistic] >= unscaled.riasec.scores[&artistic]);
}

#[test]
fn out_of_range_answers_never_reach_the_scorer() {
    let raw = json!({ "1": 3, "2": 0 });
    let parsed: Result<careerlens::assessment::UserAnswers, _> = serde_json::from_value(raw);
    assert!(parsed.is_err());

    let mut session = AssessmentSession::new(AssessmentKind::BigFive, started());
    assert!(session.record("1", 6).is_err());
    assert!(session.answers.is_empty());
}
