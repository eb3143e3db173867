use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assessment::riasec::{HollandCode, InvalidHollandCode};

/// Highest O*NET-style preparation zone.
pub const MAX_ZONE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub title: String,
    pub code: HollandCode,
    pub zone: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read career catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid career catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("career '{title}' has an invalid code: {source}")]
    InvalidCode {
        title: String,
        source: InvalidHollandCode,
    },
    #[error("career '{title}' has zone {zone} (expected 1 to {max})", max = MAX_ZONE)]
    InvalidZone { title: String, zone: u8 },
    #[error("career catalog row {row} has no title")]
    MissingTitle { row: usize },
}

#[derive(Debug, Deserialize)]
struct CareerRow {
    title: String,
    #[serde(default)]
    code: String,
    zone: u8,
}

/// Read-only list of careers, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<Career>) -> Self {
        Self { careers }
    }

    /// Built-in catalog shipped with the library.
    pub fn standard() -> Self {
        let careers = STANDARD_CAREERS
            .iter()
            .filter_map(|(title, code, zone)| match code.parse() {
                Ok(code) => Some(Career {
                    title: (*title).to_string(),
                    code,
                    zone: *zone,
                }),
                Err(err) => {
                    debug!(title, error = %err, "skipping built-in career with invalid code");
                    None
                }
            })
            .collect();
        Self { careers }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_csv_reader(file)?;
        info!(path = %path.display(), careers = catalog.len(), "loaded career catalog");
        Ok(catalog)
    }

    /// Parse `title,code,zone` rows. Codes may be shorter than three letters.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut careers = Vec::new();

        for (index, record) in csv_reader.deserialize::<CareerRow>().enumerate() {
            let row = record?;
            if row.title.is_empty() {
                return Err(CatalogImportError::MissingTitle { row: index + 1 });
            }
            let code = row
                .code
                .parse()
                .map_err(|source| CatalogImportError::InvalidCode {
                    title: row.title.clone(),
                    source,
                })?;
            if !(1..=MAX_ZONE).contains(&row.zone) {
                return Err(CatalogImportError::InvalidZone {
                    title: row.title,
                    zone: row.zone,
                });
            }

            careers.push(Career {
                title: row.title,
                code,
                zone: row.zone,
            });
        }

        Ok(Self { careers })
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Career> {
        self.careers.iter()
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

const STANDARD_CAREERS: [(&str, &str, u8); 64] = [
    ("Accountant", "CEI", 4),
    ("Actor", "AES", 2),
    ("Administrative Assistant", "CE", 2),
    ("Animator", "AIR", 4),
    ("Architect", "AIR", 5),
    ("Art Director", "AE", 4),
    ("Auditor", "CEI", 4),
    ("Biologist", "IR", 5),
    ("Carpenter", "RC", 2),
    ("Caregiver", "SR", 1),
    ("Chef", "EAR", 3),
    ("Chemist", "IRC", 5),
    ("Civil Engineer", "RIC", 4),
    ("Counselor", "SAI", 5),
    ("Data Scientist", "ICR", 5),
    ("Database Administrator", "CIR", 4),
    ("Dental Hygienist", "SRC", 3),
    ("Economist", "ICE", 5),
    ("Electrician", "RIC", 3),
    ("Elementary School Teacher", "SAC", 4),
    ("Event Planner", "ECS", 3),
    ("Fashion Designer", "AER", 4),
    ("Financial Manager", "ECI", 4),
    ("Firefighter", "RSE", 2),
    ("Fitness Trainer", "SRE", 3),
    ("Flight Attendant", "SEC", 2),
    ("Forensic Scientist", "IRC", 4),
    ("Graphic Designer", "AER", 4),
    ("Human Resources Specialist", "ESC", 4),
    ("Illustrator", "AR", 3),
    ("Insurance Underwriter", "CEI", 4),
    ("Interior Designer", "AE", 4),
    ("Journalist", "AEI", 4),
    ("Judge", "ESI", 5),
    ("Lawyer", "EI", 5),
    ("Librarian", "CSA", 5),
    ("Logistics Analyst", "CEI", 4),
    ("Management Consultant", "EIC", 5),
    ("Marketing Manager", "EAC", 4),
    ("Mathematician", "IC", 5),
    ("Mechanical Engineer", "RIC", 4),
    ("Musician", "AES", 3),
    ("Nurse", "SIC", 3),
    ("Occupational Therapist", "SIR", 5),
    ("Operations Manager", "ECS", 4),
    ("Paramedic", "SRI", 3),
    ("Pharmacist", "ICS", 5),
    ("Photographer", "ARE", 3),
    ("Physician", "ISR", 5),
    ("Pilot", "RIE", 4),
    ("Police Officer", "RES", 3),
    ("Product Manager", "EIA", 4),
    ("Psychologist", "ISA", 5),
    ("Public Relations Specialist", "EAS", 4),
    ("Real Estate Agent", "EC", 3),
    ("Research Scientist", "IAR", 5),
    ("Sales Manager", "ECS", 4),
    ("Social Worker", "SEA", 5),
    ("Software Developer", "ICR", 4),
    ("Surveyor", "RCI", 4),
    ("Systems Analyst", "ICE", 4),
    ("Technical Writer", "AIC", 4),
    ("Veterinary Technician", "RIS", 3),
    ("Writer", "AI", 4),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn standard_catalog_parses_every_entry() {
        let catalog = CareerCatalog::standard();
        assert_eq!(catalog.len(), STANDARD_CAREERS.len());
        assert!(catalog
            .iter()
            .all(|career| (1..=MAX_ZONE).contains(&career.zone) && !career.code.is_empty()));
        assert!(catalog.iter().any(|career| career.code.len() < 3));
    }

    #[test]
    fn csv_import_accepts_short_and_empty_codes() {
        let csv = "title,code,zone\n Park Ranger , RS ,3\nApprentice,,1\n";
        let catalog = CareerCatalog::from_csv_reader(Cursor::new(csv)).expect("valid csv");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.careers()[0].title, "Park Ranger");
        assert_eq!(catalog.careers()[0].code.to_string(), "RS");
        assert!(catalog.careers()[1].code.is_empty());
    }

    #[test]
    fn csv_import_rejects_bad_codes_and_zones() {
        let bad_code = "title,code,zone\nAstronaut,RXZ,5\n";
        match CareerCatalog::from_csv_reader(Cursor::new(bad_code)) {
            Err(CatalogImportError::InvalidCode { title, .. }) => assert_eq!(title, "Astronaut"),
            other => panic!("expected invalid code, got {other:?}"),
        }

        let bad_zone = "title,code,zone\nAstronaut,RIE,9\n";
        assert!(matches!(
            CareerCatalog::from_csv_reader(Cursor::new(bad_zone)),
            Err(CatalogImportError::InvalidZone { zone: 9, .. })
        ));

        let not_a_number = "title,code,zone\nAstronaut,RIE,high\n";
        assert!(matches!(
            CareerCatalog::from_csv_reader(Cursor::new(not_a_number)),
            Err(CatalogImportError::Csv(_))
        ));
    }

    #[test]
    fn import_errors_name_the_row_and_chain_their_source() {
        use std::error::Error as _;

        let bad_code = "title,code,zone\nAstronaut,RXZ,5\n";
        let err = CareerCatalog::from_csv_reader(Cursor::new(bad_code)).expect_err("bad code");
        assert_eq!(
            err.to_string(),
            "career 'Astronaut' has an invalid code: 'RXZ' is not a Holland code \
             (letters R, I, A, S, E, C only)"
        );
        assert!(err.source().is_some());

        let bad_zone = "title,code,zone\nAstronaut,RIE,9\n";
        let err = CareerCatalog::from_csv_reader(Cursor::new(bad_zone)).expect_err("bad zone");
        assert_eq!(err.to_string(), "career 'Astronaut' has zone 9 (expected 1 to 5)");
        assert!(err.source().is_none());

        let err = CareerCatalog::from_path("/nonexistent/careers.csv").expect_err("missing file");
        assert!(matches!(err, CatalogImportError::Io(_)));
        assert!(err.to_string().starts_with("failed to read career catalog: "));
        assert!(err.source().is_some());
    }
}
