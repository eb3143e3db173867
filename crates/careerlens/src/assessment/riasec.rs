use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{Domain, ScoreResult};
use super::scoring::percentile_from_z;

/// Holland interest types, declared in canonical `R, I, A, S, E, C` order.
///
/// This order is the tie-break for [`RiasecProfile::top_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Interest {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Realistic),
            'I' => Some(Self::Investigative),
            'A' => Some(Self::Artistic),
            'S' => Some(Self::Social),
            'E' => Some(Self::Enterprising),
            'C' => Some(Self::Conventional),
            _ => None,
        }
    }
}

/// An ordered sequence of interest letters such as `"SAE"`.
///
/// Career codes may carry fewer than three letters; an empty code is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HollandCode(Vec<Interest>);

impl HollandCode {
    pub fn new(letters: Vec<Interest>) -> Self {
        Self(letters)
    }

    pub fn letters(&self) -> &[Interest] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<Interest> {
        self.0.get(position).copied()
    }

    pub fn primary(&self) -> Option<Interest> {
        self.get(0)
    }

    pub fn secondary(&self) -> Option<Interest> {
        self.get(1)
    }

    pub fn contains(&self, interest: Interest) -> bool {
        self.0.contains(&interest)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for interest in &self.0 {
            write!(f, "{}", interest.letter())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a Holland code (letters R, I, A, S, E, C only)")]
pub struct InvalidHollandCode(pub String);

impl FromStr for HollandCode {
    type Err = InvalidHollandCode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .chars()
            .map(Interest::from_letter)
            .collect::<Option<Vec<_>>>()
            .map(HollandCode)
            .ok_or_else(|| InvalidHollandCode(value.trim().to_string()))
    }
}

impl Serialize for HollandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HollandCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Weights of the five domain z-scores, in `O, C, E, A, N` order.
pub type DomainWeights = [f64; 5];

pub const WEIGHT_MATRIX: [(Interest, DomainWeights); 6] = [
    (Interest::Realistic, [0.10, 0.20, -0.10, -0.20, -0.10]),
    (Interest::Investigative, [0.60, 0.20, -0.20, 0.00, 0.00]),
    (Interest::Artistic, [0.70, -0.30, 0.20, 0.10, 0.20]),
    (Interest::Social, [0.10, 0.10, 0.60, 0.50, -0.10]),
    (Interest::Enterprising, [0.10, 0.30, 0.60, -0.20, -0.20]),
    (Interest::Conventional, [-0.40, 0.70, -0.10, 0.10, 0.00]),
];

/// Interest percentiles plus the derived three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecProfile {
    pub scores: BTreeMap<Interest, u8>,
    pub top_code: HollandCode,
}

impl RiasecProfile {
    /// Three highest interests, descending; equal scores keep `R, I, A, S, E, C` order.
    pub fn top_code_from(scores: &BTreeMap<Interest, u8>) -> HollandCode {
        let mut ranked: Vec<(Interest, u8)> = Interest::ordered()
            .into_iter()
            .map(|interest| (interest, scores.get(&interest).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        HollandCode(ranked.into_iter().take(3).map(|(interest, _)| interest).collect())
    }
}

/// Linear map from domain z-scores to interest percentiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiasecTransform {
    scale: f64,
}

impl RiasecTransform {
    pub const DEFAULT_SCALE: f64 = 1.5;

    pub fn new(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            Self::DEFAULT_SCALE
        };
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Missing domains contribute a z-score of zero.
    pub fn transform(&self, domains: &BTreeMap<Domain, ScoreResult>) -> RiasecProfile {
        let z: Vec<f64> = Domain::ordered()
            .into_iter()
            .map(|domain| domains.get(&domain).map(|result| result.z_score).unwrap_or(0.0))
            .collect();

        let scores: BTreeMap<Interest, u8> = WEIGHT_MATRIX
            .iter()
            .map(|(interest, weights)| {
                let weighted: f64 = weights.iter().zip(&z).map(|(w, z)| w * z).sum();
                (*interest, percentile_from_z(weighted * self.scale))
            })
            .collect();

        let top_code = RiasecProfile::top_code_from(&scores);
        RiasecProfile { scores, top_code }
    }
}

impl Default for RiasecTransform {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE)
    }
}
