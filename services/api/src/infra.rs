use careerlens::assessment::HollandCode;
use careerlens::careers::Band;
use careerlens::error::AppError;
use careerlens::mbti::Language;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse()
}

pub(crate) fn parse_band(raw: &str) -> Result<Band, String> {
    raw.parse()
}

pub(crate) fn parse_code(raw: &str) -> Result<HollandCode, String> {
    let code: HollandCode = raw.parse().map_err(|err| format!("{err}"))?;
    if code.is_empty() {
        return Err("a Holland code needs at least one letter".to_string());
    }
    Ok(code)
}

/// Raw answers from a JSON object such as `{"1": 4, "2": 3}`; range checks happen in the core.
pub(crate) fn read_answers(path: &Path) -> Result<BTreeMap<String, i64>, AppError> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file).map_err(|err| {
        AppError::InvalidInput(format!(
            "{} is not a JSON object of item ids to answers: {}",
            path.display(),
            err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parsers_accept_cli_spellings() {
        assert_eq!(parse_language("ML"), Ok(Language::Malayalam));
        assert_eq!(parse_band("bottom"), Ok(Band::Bottom));
        assert_eq!(parse_code("sae").map(|code| code.to_string()), Ok("SAE".to_string()));
        assert!(parse_code("").is_err());
        assert!(parse_code("SQ").is_err());
        assert!(parse_band("middle").is_err());
    }

    #[test]
    fn read_answers_reports_malformed_files() {
        let dir = std::env::temp_dir();
        let good = dir.join("careerlens-api-answers-good.json");
        let bad = dir.join("careerlens-api-answers-bad.json");
        std::fs::File::create(&good)
            .and_then(|mut file| file.write_all(br#"{"1": 4, "9": 2}"#))
            .expect("write fixture");
        std::fs::File::create(&bad)
            .and_then(|mut file| file.write_all(b"[1, 2, 3]"))
            .expect("write fixture");

        let answers = read_answers(&good).expect("valid answers file");
        assert_eq!(answers.get("9"), Some(&2));
        assert!(matches!(read_answers(&bad), Err(AppError::InvalidInput(_))));
        assert!(matches!(
            read_answers(&dir.join("careerlens-api-missing.json")),
            Err(AppError::Io(_))
        ));

        let _ = std::fs::remove_file(good);
        let _ = std::fs::remove_file(bad);
    }
}
