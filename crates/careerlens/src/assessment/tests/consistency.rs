use super::common::*;
use crate::assessment::consistency::{
    AnswerCondition, ConsistencyTable, ConsistencyTableVersion, Severity,
};

#[test]
fn helper_who_uses_people_is_flagged_once() {
    let table = ConsistencyTable::for_version(ConsistencyTableVersion::Current);
    let answers = answers_with(&[("14", 5), ("9", 5)]);

    let flags = table.check(&answers);

    assert_eq!(flags.len(), 1);
    let flag = &flags[0];
    assert_eq!(flag.title.as_deref(), Some("The Altruistic Strategist"));
    assert_eq!(flag.item1_id, "14");
    assert_eq!(flag.item2_id, "9");
    assert_eq!(flag.severity, Severity::High);
    assert_eq!(flag.severity.label(), "High");
}

#[test]
fn moderate_answers_on_either_side_do_not_flag() {
    let table = ConsistencyTable::default();

    for (helps, uses) in [(3, 5), (5, 3), (1, 1), (3, 3)] {
        let answers = answers_with(&[("14", helps), ("9", uses)]);
        assert!(
            table.check(&answers).is_empty(),
            "({helps}, {uses}) should not be flagged"
        );
    }
}

#[test]
fn unanswered_items_skip_the_check() {
    let table = ConsistencyTable::default();
    let answers = answers_with(&[("14", 5)]);

    assert!(table.check(&answers).is_empty());
}

#[test]
fn flags_follow_table_order() {
    let table = ConsistencyTable::default();
    let answers = answers_with(&[("16", 4), ("2", 4), ("9", 4), ("14", 4)]);

    let titles: Vec<_> = table
        .check(&answers)
        .into_iter()
        .filter_map(|flag| flag.title)
        .collect();

    assert_eq!(
        titles,
        vec![
            "The Altruistic Strategist".to_string(),
            "The Anxious Socialite".to_string(),
        ]
    );
}

#[test]
fn legacy_table_uses_its_own_pairs_without_titles() {
    let legacy = ConsistencyTable::for_version(ConsistencyTableVersion::Legacy);
    let answers = answers_with(&[("14", 5), ("9", 5), ("7", 5), ("97", 4)]);

    let flags = legacy.check(&answers);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].item1_id, "7");
    assert!(flags[0].title.is_none());
    assert!(legacy
        .checks()
        .iter()
        .all(|check| check.when_a == AnswerCondition::AtLeast(4)));
}

#[test]
fn neutral_answers_never_flag() {
    for version in [ConsistencyTableVersion::Current, ConsistencyTableVersion::Legacy] {
        let table = ConsistencyTable::for_version(version);
        assert!(table.check(&neutral_answers()).is_empty());
    }
}

#[test]
fn table_version_parses_aliases() {
    assert_eq!(
        "Legacy".parse::<ConsistencyTableVersion>(),
        Ok(ConsistencyTableVersion::Legacy)
    );
    assert_eq!(
        "v2".parse::<ConsistencyTableVersion>(),
        Ok(ConsistencyTableVersion::Current)
    );
    assert!("v3".parse::<ConsistencyTableVersion>().is_err());
}
