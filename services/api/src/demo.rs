use crate::infra::{parse_band, parse_code, parse_language, read_answers};
use careerlens::assessment::items::IPIP_NEO_120;
use careerlens::assessment::{Domain, HollandCode, Keying};
use careerlens::careers::{Band, MatchTarget, RiskFlags, ScoredCareer};
use careerlens::config::AppConfig;
use careerlens::error::AppError;
use careerlens::http::{
    AssessmentService, BigFiveScoreRequest, BigFiveScoreResponse, MbtiScoreRequest,
    MbtiScoreResponse, RankRequest, DEFAULT_CAREER_LIMIT,
};
use careerlens::mbti::items::MBTI_ITEMS;
use careerlens::mbti::{Language, Pole};
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Instrument {
    #[default]
    BigFive,
    Mbti,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping item ids to answers on the 1-5 scale
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Which instrument the answers belong to
    #[arg(long, value_enum, default_value_t = Instrument::BigFive)]
    pub(crate) instrument: Instrument,
    /// Profile language for MBTI results (en or ml)
    #[arg(long, value_parser = parse_language, default_value = "en")]
    pub(crate) language: Language,
    /// Number of careers to list
    #[arg(long, default_value_t = DEFAULT_CAREER_LIMIT)]
    pub(crate) limit: usize,
}

#[derive(Args, Debug)]
pub(crate) struct CareersArgs {
    /// Holland code to rank against, e.g. SAE
    #[arg(long, value_parser = parse_code)]
    pub(crate) code: HollandCode,
    /// Which end of the ranking to show
    #[arg(long, value_parser = parse_band, default_value = "top")]
    pub(crate) band: Band,
    /// Number of careers to list
    #[arg(long, default_value_t = DEFAULT_CAREER_LIMIT)]
    pub(crate) limit: usize,
    /// Current job title, blended in as an alignment score
    #[arg(long)]
    pub(crate) current_career: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Profile language for the MBTI portion (en or ml)
    #[arg(long, value_parser = parse_language, default_value = "en")]
    pub(crate) language: Language,
    /// Current job title used for the alignment portion of the demo
    #[arg(long, default_value = "Accountant")]
    pub(crate) current_career: String,
}

fn load_service() -> Result<AssessmentService, AppError> {
    let config = AppConfig::load()?;
    AssessmentService::load(config.scoring, &config.data)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        instrument,
        language,
        limit,
    } = args;

    let service = load_service()?;
    let answers = read_answers(&answers)?;

    match instrument {
        Instrument::BigFive => {
            let response = service.score_big_five(BigFiveScoreRequest {
                answers,
                career_limit: limit,
            })?;
            render_big_five(&response);
        }
        Instrument::Mbti => {
            let response = service.score_mbti(MbtiScoreRequest {
                answers,
                language,
                career_limit: limit,
            })?;
            render_mbti(&response);
        }
    }

    Ok(())
}

pub(crate) fn run_careers(args: CareersArgs) -> Result<(), AppError> {
    let CareersArgs {
        code,
        band,
        limit,
        current_career,
    } = args;

    let service = load_service()?;
    let heading = format!("{} {} careers for {}", capitalized(band.label()), limit, code);
    let response = service.rank(RankRequest {
        target: MatchTarget::Code(code),
        band,
        limit,
        risk_flags: RiskFlags::default(),
        current_career,
    });

    render_careers(&heading, &response.careers);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        language,
        current_career,
    } = args;

    let service = load_service()?;
    println!("Career assessment demo (synthetic respondent)");

    let big_five = service.score_big_five(BigFiveScoreRequest {
        answers: demo_big_five_answers(),
        career_limit: 5,
    })?;
    render_big_five(&big_five);

    let bottom = service.rank(RankRequest {
        target: MatchTarget::Percentiles(big_five.report.riasec.scores.clone()),
        band: Band::Bottom,
        limit: 3,
        risk_flags: big_five.risk_flags,
        current_career: None,
    });
    render_careers("\nLeast suitable careers", &bottom.careers);

    let aligned = service.rank(RankRequest {
        target: MatchTarget::Percentiles(big_five.report.riasec.scores.clone()),
        band: Band::Top,
        limit: 5,
        risk_flags: big_five.risk_flags,
        current_career: Some(current_career.clone()),
    });
    render_careers(
        &format!("\nBest fits blended with current career '{current_career}'"),
        &aligned.careers,
    );

    println!();
    let mbti = service.score_mbti(MbtiScoreRequest {
        answers: demo_mbti_answers(),
        language,
        career_limit: 5,
    })?;
    render_mbti(&mbti);

    Ok(())
}

/// Outgoing, warm and organized, with low neuroticism.
fn demo_big_five_answers() -> BTreeMap<String, i64> {
    IPIP_NEO_120
        .iter()
        .map(|item| {
            let leaning: i64 = match item.domain {
                Domain::Extraversion | Domain::Agreeableness => 5,
                Domain::Conscientiousness => 4,
                Domain::Openness => 3,
                Domain::Neuroticism => 2,
            };
            let answer = match item.keyed {
                Keying::Positive => leaning,
                Keying::Negative => 6 - leaning,
            };
            (item.id.to_string(), answer)
        })
        .collect()
}

/// Leans E, N, F and J.
fn demo_mbti_answers() -> BTreeMap<String, i64> {
    MBTI_ITEMS
        .iter()
        .map(|item| {
            let answer = match item.pole {
                Pole::Extraversion | Pole::Intuition | Pole::Feeling | Pole::Judging => 5,
                _ => 2,
            };
            (item.id.to_string(), answer)
        })
        .collect()
}

fn render_big_five(response: &BigFiveScoreResponse) {
    let report = &response.report;

    println!("Big Five profile");
    for (domain, result) in &report.domains {
        println!(
            "- {}: percentile {} ({}) | raw {} | z {:+.2}",
            domain.label(),
            result.percentile,
            result.level.label(),
            result.raw,
            result.z_score
        );
        if let Some(insight) = report.insights.get(domain) {
            match &insight.pattern {
                Some(pattern) => println!("  {}: {}", pattern, insight.text),
                None => println!("  {}", insight.text),
            }
        }
    }

    let interests = report
        .riasec
        .scores
        .iter()
        .map(|(interest, score)| format!("{} {}", interest.letter(), score))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("\nRIASEC interests (top code {})", report.riasec.top_code);
    println!("  {}", interests);

    if report.consistency_flags.is_empty() {
        println!("\nConsistency: no contradictory answer pairs");
    } else {
        println!("\nConsistency flags");
        for flag in &report.consistency_flags {
            println!(
                "- [{}] items {} & {}: {}{}",
                flag.severity.label(),
                flag.item1_id,
                flag.item2_id,
                flag.title
                    .as_deref()
                    .map(|title| format!("{title}: "))
                    .unwrap_or_default(),
                flag.message
            );
        }
    }

    if !response.risk_flags.is_empty() {
        println!(
            "\nRisk filters applied: art_hater={} empathy_deficit={} high_manipulation={}",
            response.risk_flags.art_hater,
            response.risk_flags.empathy_deficit,
            response.risk_flags.high_manipulation
        );
    }

    render_careers("\nBest-fit careers", &response.careers);
}

fn render_mbti(response: &MbtiScoreResponse) {
    let result = &response.result;
    let details = &result.details;

    println!("MBTI type {}: {}", result.type_code, details.name);
    println!("  {}", details.description);
    let poles = result
        .scores
        .iter()
        .map(|(pole, total)| format!("{} {}", pole.letter(), total))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("  Pole totals: {}", poles);
    println!("  Strengths: {}", details.strengths.join(", "));
    println!("  Weaknesses: {}", details.weaknesses.join(", "));
    println!("  Typical careers: {}", details.careers.join(", "));

    render_careers(
        &format!("\nCatalog matches for Holland code {}", details.holland_code),
        &response.careers,
    );
}

fn render_careers(heading: &str, careers: &[ScoredCareer]) {
    println!("{heading}");
    if careers.is_empty() {
        println!("  (no careers matched)");
        return;
    }

    for (position, career) in careers.iter().enumerate() {
        let alignment = career
            .alignment_score
            .map(|score| format!(" | fit {} / alignment {}", career.personality_score, score))
            .unwrap_or_default();
        println!(
            "  {}. {} ({}, zone {}) match {}{}",
            position + 1,
            career.title,
            career.code,
            career.zone,
            career.match_score,
            alignment
        );
    }
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_respondent_leads_with_social_interests() {
        let service = AssessmentService::default();
        let response = service
            .score_big_five(BigFiveScoreRequest {
                answers: demo_big_five_answers(),
                career_limit: 5,
            })
            .expect("demo answers are valid");

        assert_eq!(response.report.domains.len(), 5);
        assert_eq!(
            response.report.top_riasec().primary(),
            Some(careerlens::assessment::Interest::Social)
        );
        assert_eq!(response.careers.len(), 5);
    }

    #[test]
    fn demo_mbti_respondent_is_enfj() {
        let service = AssessmentService::default();
        let response = service
            .score_mbti(MbtiScoreRequest {
                answers: demo_mbti_answers(),
                language: Language::English,
                career_limit: 3,
            })
            .expect("demo answers are valid");
        assert_eq!(response.result.type_code, "ENFJ");
    }

    #[test]
    fn capitalized_handles_empty_input() {
        assert_eq!(capitalized("top"), "Top");
        assert_eq!(capitalized(""), "");
    }
}
