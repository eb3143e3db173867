use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::mbti::Language;

/// Lowest accepted Likert response.
pub const MIN_ANSWER: u8 = 1;
/// Highest accepted Likert response.
pub const MAX_ANSWER: u8 = 5;
/// Value substituted for any item the respondent has not answered.
pub const NEUTRAL_ANSWER: u8 = 3;

/// The five personality domains, declared in canonical `O, C, E, A, N` order.
///
/// Map iteration over `Domain` keys follows this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl Domain {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Openness => 'O',
            Self::Conscientiousness => 'C',
            Self::Extraversion => 'E',
            Self::Agreeableness => 'A',
            Self::Neuroticism => 'N',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(Self::Openness),
            'C' => Some(Self::Conscientiousness),
            'E' => Some(Self::Extraversion),
            'A' => Some(Self::Agreeableness),
            'N' => Some(Self::Neuroticism),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A numbered facet (1-6) inside a domain, rendered as `"C4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacetKey {
    domain: Domain,
    facet: u8,
}

impl FacetKey {
    pub const fn new(domain: Domain, facet: u8) -> Self {
        Self { domain, facet }
    }

    pub const fn domain(self) -> Domain {
        self.domain
    }

    pub const fn facet(self) -> u8 {
        self.facet
    }

    /// All 30 facet keys, grouped by domain in canonical order.
    pub fn all() -> impl Iterator<Item = FacetKey> {
        Domain::ordered()
            .into_iter()
            .flat_map(|domain| (1..=6).map(move |facet| FacetKey::new(domain, facet)))
    }

    pub const fn label(self) -> &'static str {
        match (self.domain, self.facet) {
            (Domain::Neuroticism, 1) => "Anxiety",
            (Domain::Neuroticism, 2) => "Anger",
            (Domain::Neuroticism, 3) => "Depression",
            (Domain::Neuroticism, 4) => "Self-Consciousness",
            (Domain::Neuroticism, 5) => "Immoderation",
            (Domain::Neuroticism, 6) => "Vulnerability",
            (Domain::Extraversion, 1) => "Friendliness",
            (Domain::Extraversion, 2) => "Gregariousness",
            (Domain::Extraversion, 3) => "Assertiveness",
            (Domain::Extraversion, 4) => "Activity Level",
            (Domain::Extraversion, 5) => "Excitement-Seeking",
            (Domain::Extraversion, 6) => "Cheerfulness",
            (Domain::Openness, 1) => "Imagination",
            (Domain::Openness, 2) => "Artistic Interests",
            (Domain::Openness, 3) => "Emotionality",
            (Domain::Openness, 4) => "Adventurousness",
            (Domain::Openness, 5) => "Intellect",
            (Domain::Openness, 6) => "Liberalism",
            (Domain::Agreeableness, 1) => "Trust",
            (Domain::Agreeableness, 2) => "Morality",
            (Domain::Agreeableness, 3) => "Altruism",
            (Domain::Agreeableness, 4) => "Cooperation",
            (Domain::Agreeableness, 5) => "Modesty",
            (Domain::Agreeableness, 6) => "Sympathy",
            (Domain::Conscientiousness, 1) => "Self-Efficacy",
            (Domain::Conscientiousness, 2) => "Orderliness",
            (Domain::Conscientiousness, 3) => "Dutifulness",
            (Domain::Conscientiousness, 4) => "Achievement-Striving",
            (Domain::Conscientiousness, 5) => "Self-Discipline",
            (Domain::Conscientiousness, 6) => "Cautiousness",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.domain.letter(), self.facet)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a facet key (expected a domain letter followed by 1-6)")]
pub struct InvalidFacetKey(pub String);

impl FromStr for FacetKey {
    type Err = InvalidFacetKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        let domain = chars.next().and_then(Domain::from_letter);
        let facet = chars.as_str().parse::<u8>().ok();

        match (domain, facet) {
            (Some(domain), Some(facet)) if (1..=6).contains(&facet) => {
                Ok(FacetKey::new(domain, facet))
            }
            _ => Err(InvalidFacetKey(trimmed.to_string())),
        }
    }
}

impl Serialize for FacetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FacetKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Scoring direction of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    Positive,
    Negative,
}

impl Keying {
    /// Positive items keep the answer; negative items score `6 - answer`.
    pub const fn apply(self, answer: u8) -> u8 {
        match self {
            Self::Positive => answer,
            Self::Negative => (MIN_ANSWER + MAX_ANSWER) - answer,
        }
    }

    pub const fn sign(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl Serialize for Keying {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.sign())
    }
}

/// One Big Five questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub text: &'static str,
    pub text_ml: &'static str,
    pub domain: Domain,
    pub facet: u8,
    pub keyed: Keying,
}

impl Item {
    pub const fn facet_key(&self) -> FacetKey {
        FacetKey::new(self.domain, self.facet)
    }

    pub const fn text_in(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.text,
            Language::Malayalam => self.text_ml,
        }
    }
}

/// Three-band qualitative reading of a percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Average,
    High,
}

impl Level {
    /// Boundaries are exclusive: 30 and 70 both read as `Average`.
    pub const fn from_percentile(percentile: u8) -> Self {
        if percentile < 30 {
            Self::Low
        } else if percentile > 70 {
            Self::High
        } else {
            Self::Average
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
        }
    }
}

/// Standardized result for one domain or facet in a single scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub raw: u32,
    pub z_score: f64,
    pub percentile: u8,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer {value} for item '{item_id}' is outside the 1-5 scale")]
    OutOfRange { item_id: String, value: i64 },
}

/// Likert responses keyed by item id.
///
/// Only values in `1..=5` are ever stored; anything else is rejected on entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>")]
pub struct UserAnswers(BTreeMap<String, u8>);

impl UserAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous value for the item if any.
    pub fn insert(
        &mut self,
        item_id: impl Into<String>,
        value: i64,
    ) -> Result<Option<u8>, AnswerError> {
        let item_id = item_id.into();
        let checked = u8::try_from(value)
            .ok()
            .filter(|value| (MIN_ANSWER..=MAX_ANSWER).contains(value))
            .ok_or_else(|| AnswerError::OutOfRange {
                item_id: item_id.clone(),
                value,
            })?;

        Ok(self.0.insert(item_id, checked))
    }

    pub fn get(&self, item_id: &str) -> Option<u8> {
        self.0.get(item_id).copied()
    }

    /// Answer for the item, or the neutral midpoint when unanswered.
    pub fn answer_or_neutral(&self, item_id: &str) -> u8 {
        self.get(item_id).unwrap_or(NEUTRAL_ANSWER)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.0.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl TryFrom<BTreeMap<String, i64>> for UserAnswers {
    type Error = AnswerError;

    fn try_from(raw: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        let mut answers = UserAnswers::new();
        for (item_id, value) in raw {
            answers.insert(item_id, value)?;
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_are_average() {
        assert_eq!(Level::from_percentile(29), Level::Low);
        assert_eq!(Level::from_percentile(30), Level::Average);
        assert_eq!(Level::from_percentile(70), Level::Average);
        assert_eq!(Level::from_percentile(71), Level::High);
    }

    #[test]
    fn reverse_keying_mirrors_around_the_midpoint() {
        for answer in MIN_ANSWER..=MAX_ANSWER {
            let mirrored = MIN_ANSWER + MAX_ANSWER - answer;
            assert_eq!(
                Keying::Negative.apply(answer) + Keying::Negative.apply(mirrored),
                6
            );
            assert_eq!(Keying::Positive.apply(answer), answer);
        }
    }

    #[test]
    fn facet_keys_parse_and_render() {
        let key: FacetKey = "c4".parse().expect("facet key parses");
        assert_eq!(key, FacetKey::new(Domain::Conscientiousness, 4));
        assert_eq!(key.to_string(), "C4");
        assert_eq!(key.label(), "Achievement-Striving");
        assert!("C7".parse::<FacetKey>().is_err());
        assert!("X1".parse::<FacetKey>().is_err());
        assert_eq!(FacetKey::all().count(), 30);
    }

    #[test]
    fn answers_reject_values_outside_the_scale() {
        let mut answers = UserAnswers::new();
        assert!(answers.insert("1", 5).is_ok());
        assert_eq!(
            answers.insert("2", 6),
            Err(AnswerError::OutOfRange {
                item_id: "2".to_string(),
                value: 6,
            })
        );
        assert!(answers.insert("3", 0).is_err());
        assert_eq!(answers.answer_or_neutral("1"), 5);
        assert_eq!(answers.answer_or_neutral("missing"), NEUTRAL_ANSWER);
    }

    #[test]
    fn answers_deserialize_with_validation() {
        let answers: UserAnswers =
            serde_json::from_str(r#"{"1": 4, "2": 2}"#).expect("valid answers parse");
        assert_eq!(answers.get("1"), Some(4));
        assert_eq!(answers.len(), 2);

        let error = serde_json::from_str::<UserAnswers>(r#"{"1": 9}"#).expect_err("rejects 9");
        assert!(error.to_string().contains("outside the 1-5 scale"));
    }
}
