use std::collections::BTreeMap;
use std::io::Cursor;

use careerlens::assessment::{BigFiveScorer, HollandCode, Interest, ScoringConfig, UserAnswers};
use careerlens::careers::{
    alignment_score, blend, percentile_mode_score, string_mode_score, Band, CareerCatalog,
    CareerMatcher, CatalogImportError, MatchTarget, RankOptions, RiskFlags,
};

const CATALOG_CSV: &str = "\
title,code,zone
Counselor, SAI, 5
Graphic Designer,AER,4
Accountant,CEI,4
Social Worker,SEA,5
Data Scientist,ICR,4
";

fn code(letters: &str) -> HollandCode {
    letters.parse().expect("valid holland code")
}

fn matcher() -> CareerMatcher {
    let catalog = CareerCatalog::from_csv_reader(Cursor::new(CATALOG_CSV)).expect("catalog parses");
    assert_eq!(catalog.len(), 5);
    CareerMatcher::new(catalog)
}

fn titles(careers: &[careerlens::careers::ScoredCareer]) -> Vec<&str> {
    careers.iter().map(|career| career.title.as_str()).collect()
}

#[test]
fn string_and_percentile_modes_follow_the_point_tables() {
    assert_eq!(string_mode_score(&code("SAI"), &code("SAE")), 100);
    assert_eq!(string_mode_score(&code("SAI"), &code("AER")), 35);
    assert_eq!(string_mode_score(&code("SAI"), &code("CEI")), 0);

    let percentiles: BTreeMap<Interest, u8> = [(Interest::Realistic, 100)].into_iter().collect();
    assert_eq!(percentile_mode_score(&percentiles, &code("RIA")), 50);
    assert_eq!(percentile_mode_score(&percentiles, &code("R")), 100);
    assert_eq!(percentile_mode_score(&percentiles, &HollandCode::default()), 0);

    assert_eq!(alignment_score(&code("SAI"), &code("SEA")), 60);
    assert_eq!(blend(100, 60), 84);
}

#[test]
fn imported_catalog_ranks_both_bands() {
    let matcher = matcher();
    let target = MatchTarget::Code(code("SAI"));
    let options = RankOptions::default();

    let ranked = matcher.rank(&target, &options);
    assert_eq!(
        titles(&ranked),
        [
            "Counselor",
            "Social Worker",
            "Graphic Designer",
            "Data Scientist",
            "Accountant"
        ]
    );
    assert!(ranked.iter().all(|career| career.alignment_score.is_none()));
    assert!(ranked
        .iter()
        .all(|career| career.match_score == career.personality_score));

    let bottom = matcher.band(&target, &options, Band::Bottom, 2);
    assert_eq!(titles(&bottom), ["Accountant", "Data Scientist"]);
    assert_eq!(bottom[0].match_score, 0);
    assert_eq!(bottom[1].match_score, 10);

    let top = matcher.band(&target, &options, Band::Top, 50);
    assert_eq!(top.len(), 5);
}

#[test]
fn current_career_is_resolved_loosely_and_blended() {
    let matcher = matcher();
    let target = MatchTarget::Code(code("SAI"));

    let options = RankOptions {
        current_career: Some("  SOCIAL WORKER ".to_string()),
        ..RankOptions::default()
    };
    let top = matcher.top(&target, &options, 1);
    assert_eq!(top[0].title, "Counselor");
    assert_eq!(top[0].personality_score, 100);
    assert_eq!(top[0].alignment_score, Some(60));
    assert_eq!(top[0].match_score, 84);

    assert_eq!(
        matcher.find_career("data").map(|career| career.title.as_str()),
        Some("Data Scientist")
    );
    assert!(matcher.find_career("Astronaut").is_none());

    let unknown = RankOptions {
        current_career: Some("Astronaut".to_string()),
        ..RankOptions::default()
    };
    let ranked = matcher.top(&target, &unknown, 1);
    assert_eq!(ranked[0].match_score, 100);
    assert_eq!(ranked[0].alignment_score, None);
}

#[test]
fn manipulative_report_removes_care_careers() {
    let mut answers = UserAnswers::new();
    answers.insert("14", 5).expect("valid answer");
    answers.insert("9", 5).expect("valid answer");
    let report = BigFiveScorer::new(ScoringConfig::default()).score(&answers);

    let risk_flags = RiskFlags::from_report(&report);
    assert!(risk_flags.high_manipulation);
    assert!(!risk_flags.is_empty());

    let options = RankOptions {
        risk_flags,
        current_career: None,
    };
    let ranked = matcher().rank(&MatchTarget::Code(code("SAI")), &options);
    assert_eq!(
        titles(&ranked),
        ["Graphic Designer", "Data Scientist", "Accountant"]
    );
}

#[test]
fn neutral_report_keeps_every_career() {
    let report = BigFiveScorer::new(ScoringConfig::default()).score(&UserAnswers::new());
    let risk_flags = RiskFlags::from_report(&report);
    assert_eq!(risk_flags, RiskFlags::default());

    let options = RankOptions {
        risk_flags,
        current_career: None,
    };
    let ranked = matcher().rank(&MatchTarget::Code(code("SAI")), &options);
    assert_eq!(ranked.len(), 5);
}

#[test]
fn art_hater_flag_drops_design_titles() {
    let flags = RiskFlags {
        art_hater: true,
        ..RiskFlags::default()
    };
    let options = RankOptions {
        risk_flags: flags,
        current_career: None,
    };
    let ranked = matcher().rank(&MatchTarget::Code(code("AER")), &options);
    assert!(!titles(&ranked).contains(&"Graphic Designer"));
    assert_eq!(ranked.len(), 4);
}

#[test]
fn malformed_catalog_rows_are_reported() {
    let bad_zone = "title,code,zone\nPilot,RIE,7\n";
    assert!(matches!(
        CareerCatalog::from_csv_reader(Cursor::new(bad_zone)),
        Err(CatalogImportError::InvalidZone { zone: 7, .. })
    ));

    let bad_code = "title,code,zone\nPilot,XYZ,3\n";
    match CareerCatalog::from_csv_reader(Cursor::new(bad_code)) {
        Err(CatalogImportError::InvalidCode { title, .. }) => assert_eq!(title, "Pilot"),
        other => panic!("expected invalid code, got {other:?}"),
    }

    let missing_title = "title,code,zone\n,RIE,3\n";
    assert!(matches!(
        CareerCatalog::from_csv_reader(Cursor::new(missing_title)),
        Err(CatalogImportError::MissingTitle { row: 1 })
    ));
}

#[test]
fn standard_catalog_is_usable_out_of_the_box() {
    let matcher = CareerMatcher::default();
    assert!(matcher.catalog().len() >= 60);

    let bottom = matcher.bottom(&MatchTarget::Code(code("RIC")), &RankOptions::default(), 5);
    assert_eq!(bottom.len(), 5);
    assert!(bottom
        .windows(2)
        .all(|pair| pair[0].match_score <= pair[1].match_score));
}
