use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{Domain, FacetKey};

/// Reference distribution of a raw total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Norm {
    pub mean: f64,
    pub sd: f64,
}

impl Norm {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Used for any key the table does not know.
    pub const FALLBACK: Norm = Norm::new(0.0, 1.0);
}

/// A domain or facet the norm table can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreKey {
    Domain(Domain),
    Facet(FacetKey),
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreKey::Domain(domain) => write!(f, "{domain}"),
            ScoreKey::Facet(facet) => write!(f, "{facet}"),
        }
    }
}

impl FromStr for ScoreKey {
    type Err = NormTableError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some(domain) = Domain::from_letter(letter) {
                return Ok(ScoreKey::Domain(domain));
            }
        }

        trimmed
            .parse::<FacetKey>()
            .map(ScoreKey::Facet)
            .map_err(|_| NormTableError::UnknownKey(trimmed.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormTableError {
    #[error("failed to read norm table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid norm table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("norm key '{0}' is neither a domain nor a facet")]
    UnknownKey(String),
    #[error("norm for '{key}' must have a finite mean and sd >= 0")]
    InvalidNorm { key: String },
}

/// Mean/sd per domain and facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormTable {
    entries: HashMap<ScoreKey, Norm>,
}

impl NormTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: ScoreKey, norm: Norm) -> Self {
        self.entries.insert(key, norm);
        self
    }

    pub fn insert(&mut self, key: ScoreKey, norm: Norm) -> Option<Norm> {
        self.entries.insert(key, norm)
    }

    /// Norm for the key, or `{mean: 0, sd: 1}` when the table has no entry.
    pub fn get(&self, key: ScoreKey) -> Norm {
        match self.entries.get(&key) {
            Some(norm) => *norm,
            None => {
                debug!(%key, "no norm entry, using fallback");
                Norm::FALLBACK
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, NormTableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let table = Self::from_json_reader(file)?;
        info!(path = %path.display(), entries = table.len(), "loaded norm table");
        Ok(table)
    }

    /// Parse `{"N": {"mean": 66.5, "sd": 15.9}, "C4": {...}}`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, NormTableError> {
        let raw: BTreeMap<String, Norm> = serde_json::from_reader(reader)?;
        let mut table = NormTable::new();

        for (key, norm) in raw {
            if !norm.mean.is_finite() || !norm.sd.is_finite() || norm.sd < 0.0 {
                return Err(NormTableError::InvalidNorm { key });
            }
            table.insert(key.parse()?, norm);
        }

        Ok(table)
    }

    /// Reference norms for the 120-item instrument.
    pub fn ipip_neo_120() -> Self {
        let mut table = NormTable::new();

        for (domain, mean, sd) in DOMAIN_NORMS {
            table.insert(ScoreKey::Domain(domain), Norm::new(mean, sd));
        }
        for (domain, facets) in FACET_NORMS {
            for (index, (mean, sd)) in facets.into_iter().enumerate() {
                let key = FacetKey::new(domain, index as u8 + 1);
                table.insert(ScoreKey::Facet(key), Norm::new(mean, sd));
            }
        }

        table
    }
}

const DOMAIN_NORMS: [(Domain, f64, f64); 5] = [
    (Domain::Openness, 82.4, 12.6),
    (Domain::Conscientiousness, 86.1, 13.9),
    (Domain::Extraversion, 79.3, 14.8),
    (Domain::Agreeableness, 87.5, 11.7),
    (Domain::Neuroticism, 66.5, 15.9),
];

const FACET_NORMS: [(Domain, [(f64, f64); 6]); 5] = [
    (
        Domain::Openness,
        [
            (14.5, 3.1),
            (14.9, 3.3),
            (14.6, 2.8),
            (13.1, 2.9),
            (13.8, 3.2),
            (11.5, 3.0),
        ],
    ),
    (
        Domain::Conscientiousness,
        [
            (15.5, 2.5),
            (13.4, 3.4),
            (16.2, 2.4),
            (14.7, 2.9),
            (13.5, 3.1),
            (12.8, 3.3),
        ],
    ),
    (
        Domain::Extraversion,
        [
            (14.3, 3.2),
            (11.9, 3.8),
            (13.2, 3.4),
            (12.9, 2.7),
            (12.4, 3.5),
            (14.6, 3.0),
        ],
    ),
    (
        Domain::Agreeableness,
        [
            (13.9, 3.0),
            (16.1, 2.7),
            (16.0, 2.5),
            (14.8, 3.1),
            (12.4, 3.2),
            (14.3, 2.9),
        ],
    ),
    (
        Domain::Neuroticism,
        [
            (12.4, 3.4),
            (10.9, 3.5),
            (9.8, 3.6),
            (11.5, 3.3),
            (11.2, 2.9),
            (10.7, 3.1),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn built_in_table_covers_every_domain_and_facet() {
        let table = NormTable::ipip_neo_120();
        assert_eq!(table.len(), 35);
        let norm = table.get(ScoreKey::Facet(FacetKey::new(Domain::Conscientiousness, 4)));
        assert_eq!(norm, Norm::new(14.7, 2.9));
    }

    #[test]
    fn missing_keys_fall_back_to_unit_norm() {
        let table = NormTable::new();
        assert_eq!(table.get(ScoreKey::Domain(Domain::Neuroticism)), Norm::FALLBACK);
    }

    #[test]
    fn json_reader_parses_domain_and_facet_keys() {
        let json = r#"{"N": {"mean": 70.0, "sd": 12.0}, "c4": {"mean": 12.0, "sd": 3.0}}"#;
        let table = NormTable::from_json_reader(Cursor::new(json)).expect("norms parse");
        assert_eq!(
            table.get(ScoreKey::Domain(Domain::Neuroticism)),
            Norm::new(70.0, 12.0)
        );
        assert_eq!(
            table.get(ScoreKey::Facet(FacetKey::new(Domain::Conscientiousness, 4))),
            Norm::new(12.0, 3.0)
        );
    }

    #[test]
    fn json_reader_rejects_unknown_keys_and_negative_sd() {
        let unknown = NormTable::from_json_reader(Cursor::new(r#"{"Z9": {"mean": 1, "sd": 1}}"#))
            .expect_err("unknown key rejected");
        assert!(matches!(unknown, NormTableError::UnknownKey(key) if key == "Z9"));

        let negative = NormTable::from_json_reader(Cursor::new(r#"{"N": {"mean": 1, "sd": -1}}"#))
            .expect_err("negative sd rejected");
        assert!(matches!(negative, NormTableError::InvalidNorm { .. }));
    }

    #[test]
    fn load_errors_render_messages_and_sources() {
        use std::error::Error as _;

        let unknown = NormTable::from_json_reader(Cursor::new(r#"{"Z9": {"mean": 1, "sd": 1}}"#))
            .expect_err("unknown key rejected");
        assert_eq!(
            unknown.to_string(),
            "norm key 'Z9' is neither a domain nor a facet"
        );
        assert!(unknown.source().is_none());

        let malformed = NormTable::from_json_reader(Cursor::new("{")).expect_err("bad json");
        assert!(matches!(malformed, NormTableError::Json(_)));
        assert!(malformed.to_string().starts_with("invalid norm table JSON: "));
        assert!(malformed.source().is_some());

        let missing = NormTable::from_path("/nonexistent/norms.json").expect_err("missing file");
        assert!(matches!(missing, NormTableError::Io(_)));
        assert!(missing.source().is_some());
    }
}
