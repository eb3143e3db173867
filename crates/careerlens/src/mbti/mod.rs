//! MBTI-style instrument: per-pole answer sums and a static profile table.

pub mod items;
pub mod profiles;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::domain::UserAnswers;
use crate::assessment::riasec::HollandCode;
use items::MBTI_ITEMS;
use profiles::{profile_index, Localized, MbtiProfile, PROFILES};

/// One side of an MBTI dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Pole {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Extraversion,
            Self::Introversion,
            Self::Sensing,
            Self::Intuition,
            Self::Thinking,
            Self::Feeling,
            Self::Judging,
            Self::Perceiving,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Introversion => 'I',
            Self::Sensing => 'S',
            Self::Intuition => 'N',
            Self::Thinking => 'T',
            Self::Feeling => 'F',
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }
}

/// The four dichotomies as `(first, second)`; ties go to `first`.
pub const AXES: [(Pole, Pole); 4] = [
    (Pole::Extraversion, Pole::Introversion),
    (Pole::Sensing, Pole::Intuition),
    (Pole::Thinking, Pole::Feeling),
    (Pole::Judging, Pole::Perceiving),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MbtiItem {
    pub id: &'static str,
    pub text: &'static str,
    pub text_ml: &'static str,
    pub pole: Pole,
}

impl MbtiItem {
    pub const fn text_in(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.text,
            Language::Malayalam => self.text_ml,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ml")]
    Malayalam,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Malayalam => "ml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ml" | "malayalam" => Ok(Self::Malayalam),
            other => Err(format!("unsupported language '{other}' (expected en or ml)")),
        }
    }
}

/// Profile text resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiProfileView {
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub careers: Vec<&'static str>,
    pub holland_code: &'static str,
}

impl MbtiProfileView {
    fn localize(profile: &MbtiProfile, language: Language) -> Self {
        Self {
            name: profile.name.resolve(language),
            description: profile.description.resolve(language),
            strengths: Localized::resolve_all(profile.strengths, language),
            weaknesses: Localized::resolve_all(profile.weaknesses, language),
            careers: Localized::resolve_all(profile.careers, language),
            holland_code: profile.holland_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MbtiResult {
    #[serde(rename = "type")]
    pub type_code: String,
    pub scores: BTreeMap<Pole, u32>,
    pub details: MbtiProfileView,
}

impl MbtiResult {
    /// Holland code of the matched profile, usable for string-mode ranking.
    pub fn holland_code(&self) -> HollandCode {
        self.details.holland_code.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MbtiScorer {
    items: &'static [MbtiItem],
}

impl MbtiScorer {
    pub fn new() -> Self {
        Self { items: &MBTI_ITEMS }
    }

    pub fn with_items(items: &'static [MbtiItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'static [MbtiItem] {
        self.items
    }

    /// Pole sums over the item bank; unanswered items count as neutral.
    pub fn pole_totals(&self, answers: &UserAnswers) -> BTreeMap<Pole, u32> {
        let mut totals: BTreeMap<Pole, u32> =
            Pole::ordered().into_iter().map(|pole| (pole, 0)).collect();
        for item in self.items {
            *totals.entry(item.pole).or_default() += u32::from(answers.answer_or_neutral(item.id));
        }
        totals
    }

    pub fn score(&self, answers: &UserAnswers, language: Language) -> MbtiResult {
        let scores = self.pole_totals(answers);
        let poles = AXES.map(|(first, second)| {
            let total = |pole: Pole| scores.get(&pole).copied().unwrap_or(0);
            if total(first) >= total(second) {
                first
            } else {
                second
            }
        });

        let type_code: String = poles.iter().map(|pole| pole.letter()).collect();
        let profile = &PROFILES[profile_index(poles)];
        debug!(type_code = %type_code, language = %language, "mbti scoring run complete");

        MbtiResult {
            type_code,
            scores,
            details: MbtiProfileView::localize(profile, language),
        }
    }
}

impl Default for MbtiScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Static profile lookup by four-letter code, case-insensitive.
pub fn profile(code: &str) -> Option<&'static MbtiProfile> {
    PROFILES
        .iter()
        .find(|profile| profile.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_for(pole_values: &[(Pole, i64)]) -> UserAnswers {
        let mut answers = UserAnswers::new();
        for item in MBTI_ITEMS.iter() {
            if let Some((_, value)) = pole_values.iter().find(|(pole, _)| *pole == item.pole) {
                answers.insert(item.id, *value).expect("valid answer");
            }
        }
        answers
    }

    #[test]
    fn item_bank_has_four_items_per_pole() {
        for pole in Pole::ordered() {
            let count = MBTI_ITEMS.iter().filter(|item| item.pole == pole).count();
            assert_eq!(count, 4, "pole {pole:?}");
        }
    }

    #[test]
    fn empty_answers_tie_every_axis_toward_the_first_pole() {
        let result = MbtiScorer::new().score(&UserAnswers::new(), Language::English);
        assert_eq!(result.type_code, "ESTJ");
        assert!(result.scores.values().all(|total| *total == 12));
        assert_eq!(result.details.name, "The Executive");
    }

    #[test]
    fn dominant_poles_form_the_type_code() {
        let answers = answers_for(&[
            (Pole::Introversion, 5),
            (Pole::Extraversion, 1),
            (Pole::Intuition, 4),
            (Pole::Feeling, 5),
            (Pole::Thinking, 2),
            (Pole::Perceiving, 4),
        ]);
        let result = MbtiScorer::new().score(&answers, Language::English);
        assert_eq!(result.type_code, "INFP");
        assert_eq!(result.scores[&Pole::Introversion], 20);
        assert_eq!(result.scores[&Pole::Sensing], 12);
        assert_eq!(result.holland_code().to_string(), "ASI");
    }

    #[test]
    fn malayalam_resolves_every_profile_field() {
        let answers = answers_for(&[(Pole::Introversion, 5), (Pole::Intuition, 5)]);
        let result = MbtiScorer::new().score(&answers, Language::Malayalam);
        assert_eq!(result.type_code, "INTJ");
        assert_eq!(result.details.name, "ആസൂത്രകൻ");
        assert!(result.details.description.starts_with("സ്വതന്ത്രരും"));
        assert_eq!(result.details.strengths[0], "തന്ത്രജ്ഞർ");
        assert_eq!(result.details.careers[0], "ഡാറ്റ സയന്റിസ്റ്റ്");
        assert_eq!(result.details.holland_code, "ICR");
    }

    #[test]
    fn language_changes_every_detail_field_of_every_profile() {
        for profile in &PROFILES {
            let english = MbtiProfileView::localize(profile, Language::English);
            let malayalam = MbtiProfileView::localize(profile, Language::Malayalam);
            assert_ne!(malayalam.name, english.name, "{}", profile.code);
            assert_ne!(malayalam.description, english.description, "{}", profile.code);
            for (field, en, ml) in [
                ("strengths", &english.strengths, &malayalam.strengths),
                ("weaknesses", &english.weaknesses, &malayalam.weaknesses),
                ("careers", &english.careers, &malayalam.careers),
            ] {
                assert_eq!(en.len(), ml.len(), "{} {field}", profile.code);
                for (en_entry, ml_entry) in en.iter().zip(ml.iter()) {
                    assert!(!ml_entry.is_empty(), "{} {field}", profile.code);
                    assert_ne!(en_entry, ml_entry, "{} {field}", profile.code);
                }
            }
            assert_eq!(malayalam.holland_code, english.holland_code);
        }
    }

    #[test]
    fn items_carry_text_in_both_languages() {
        for item in MBTI_ITEMS.iter() {
            assert!(!item.text_ml.is_empty(), "{}", item.id);
            assert_ne!(item.text_in(Language::Malayalam), item.text_in(Language::English));
        }
        assert_eq!(MBTI_ITEMS[0].text_in(Language::English), MBTI_ITEMS[0].text);
    }

    #[test]
    fn every_profile_sits_at_its_bit_index() {
        for (index, profile) in PROFILES.iter().enumerate() {
            let poles: Vec<Pole> = profile
                .code
                .chars()
                .zip(AXES)
                .map(|(letter, (first, second))| {
                    if letter == first.letter() {
                        first
                    } else {
                        second
                    }
                })
                .collect();
            let poles: [Pole; 4] = poles.try_into().expect("four letters");
            assert_eq!(profile_index(poles), index, "{}", profile.code);
            assert!(profile.holland_code.parse::<HollandCode>().is_ok());
            assert!(!profile.name.ml.is_empty());
        }
        assert!(profile("infj").is_some());
        assert!(profile("XXXX").is_none());
    }

    #[test]
    fn result_serializes_type_and_pole_letters() {
        let result = MbtiScorer::new().score(&UserAnswers::new(), Language::English);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["type"], "ESTJ");
        assert_eq!(json["scores"]["N"], 12);
        assert_eq!(json["details"]["holland_code"], "ECR");
    }
}
