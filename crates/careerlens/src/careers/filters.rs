use serde::{Deserialize, Serialize};

use crate::assessment::domain::{Domain, FacetKey, NEUTRAL_ANSWER};
use crate::assessment::items::IPIP_NEO_120;
use crate::assessment::AssessmentReport;

/// Titles dropped when the user shows no interest in artistic work.
pub const ARTISTIC_TITLE_KEYWORDS: [&str; 7] = [
    "Architect",
    "Designer",
    "Artist",
    "Illustrator",
    "Animator",
    "Musician",
    "Photographer",
];

/// Care-oriented titles dropped for low empathy or manipulative profiles.
pub const CARE_TITLE_KEYWORDS: [&str; 10] = [
    "Nurse",
    "Counselor",
    "Therapist",
    "Social Worker",
    "Teacher",
    "Caregiver",
    "Psychologist",
    "Paramedic",
    "Physician",
    "Hygienist",
];

/// Facet percentile below which a risk flag is raised.
pub const RISK_PERCENTILE: u8 = 20;

const ARTISTIC_INTERESTS: FacetKey = FacetKey::new(Domain::Openness, 2);
const MORALITY: FacetKey = FacetKey::new(Domain::Agreeableness, 2);
const SYMPATHY: FacetKey = FacetKey::new(Domain::Agreeableness, 6);

const MANIPULATION_PATTERN: &str = "The Altruistic Strategist";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFlags {
    pub art_hater: bool,
    pub empathy_deficit: bool,
    pub high_manipulation: bool,
}

/// Raw facet sum of a respondent who answers every facet item neutrally.
fn neutral_facet_raw(key: FacetKey) -> u32 {
    let items = IPIP_NEO_120
        .iter()
        .filter(|item| item.facet_key() == key)
        .count();
    u32::try_from(items)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(NEUTRAL_ANSWER))
}

impl RiskFlags {
    /// A facet counts as low only when its percentile is under
    /// [`RISK_PERCENTILE`] and its raw sum is under the neutral sum. Norm means
    /// sit above neutral for some facets, so percentile alone would flag
    /// respondents who answered 3 throughout or skipped the facet.
    pub fn from_report(report: &AssessmentReport) -> Self {
        let below = |key: FacetKey| {
            report.facets.get(&key).is_some_and(|result| {
                result.percentile < RISK_PERCENTILE && result.raw < neutral_facet_raw(key)
            })
        };

        Self {
            art_hater: below(ARTISTIC_INTERESTS),
            empathy_deficit: below(SYMPATHY),
            high_manipulation: below(MORALITY) || report.has_flag_titled(MANIPULATION_PATTERN),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.art_hater || self.empathy_deficit || self.high_manipulation)
    }

    /// Case-insensitive keyword match against the active blacklists.
    pub fn excludes(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        let hits = |keywords: &[&str]| {
            keywords
                .iter()
                .any(|keyword| title.contains(&keyword.to_lowercase()))
        };

        (self.art_hater && hits(&ARTISTIC_TITLE_KEYWORDS))
            || ((self.empathy_deficit || self.high_manipulation) && hits(&CARE_TITLE_KEYWORDS))
    }
}
