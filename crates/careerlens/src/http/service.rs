use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::{
    AssessmentKind, AssessmentReport, BigFiveScorer, Item, NormTable, ScoringConfig, UserAnswers,
};
use crate::careers::{
    Band, CareerCatalog, CareerMatcher, MatchTarget, RankOptions, RiskFlags, ScoredCareer,
};
use crate::config::DataConfig;
use crate::error::AppError;
use crate::mbti::{Language, MbtiItem, MbtiResult, MbtiScorer};

pub const DEFAULT_CAREER_LIMIT: usize = 10;

fn default_limit() -> usize {
    DEFAULT_CAREER_LIMIT
}

#[derive(Debug, Clone, Deserialize)]
pub struct BigFiveScoreRequest {
    pub answers: BTreeMap<String, i64>,
    #[serde(default = "default_limit")]
    pub career_limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BigFiveScoreResponse {
    pub report: AssessmentReport,
    pub risk_flags: RiskFlags,
    pub careers: Vec<ScoredCareer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MbtiScoreRequest {
    pub answers: BTreeMap<String, i64>,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_limit")]
    pub career_limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MbtiScoreResponse {
    pub result: MbtiResult,
    pub careers: Vec<ScoredCareer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub target: MatchTarget,
    #[serde(default)]
    pub band: Band,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub risk_flags: RiskFlags,
    #[serde(default)]
    pub current_career: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub band: Band,
    pub careers: Vec<ScoredCareer>,
}

/// Item listing for one instrument.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ItemsView {
    BigFive(&'static [Item]),
    Mbti(&'static [MbtiItem]),
}

/// Shared read-only scoring state for every request.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    scorer: BigFiveScorer,
    mbti: MbtiScorer,
    matcher: CareerMatcher,
}

impl AssessmentService {
    pub fn new(scorer: BigFiveScorer, mbti: MbtiScorer, matcher: CareerMatcher) -> Self {
        Self {
            scorer,
            mbti,
            matcher,
        }
    }

    /// Built-in tables with the given scoring constants.
    pub fn standard(config: ScoringConfig) -> Self {
        Self::new(
            BigFiveScorer::new(config),
            MbtiScorer::new(),
            CareerMatcher::default(),
        )
    }

    /// Built-in tables, replaced by files where configured.
    pub fn load(scoring: ScoringConfig, data: &DataConfig) -> Result<Self, AppError> {
        let mut scorer = BigFiveScorer::new(scoring);
        if let Some(path) = &data.norms_path {
            scorer = scorer.with_norms(NormTable::from_path(path)?);
        }

        let catalog = match &data.career_catalog_path {
            Some(path) => CareerCatalog::from_path(path)?,
            None => CareerCatalog::standard(),
        };

        info!(
            norms = scorer.norms().len(),
            careers = catalog.len(),
            riasec_scale = scoring.riasec_scale,
            consistency_table = %scoring.consistency_table,
            "assessment tables ready"
        );

        Ok(Self::new(scorer, MbtiScorer::new(), CareerMatcher::new(catalog)))
    }

    pub fn matcher(&self) -> &CareerMatcher {
        &self.matcher
    }

    pub fn items(&self, kind: AssessmentKind) -> ItemsView {
        match kind {
            AssessmentKind::BigFive => ItemsView::BigFive(self.scorer.items()),
            AssessmentKind::Mbti => ItemsView::Mbti(self.mbti.items()),
        }
    }

    pub fn score_big_five(
        &self,
        request: BigFiveScoreRequest,
    ) -> Result<BigFiveScoreResponse, AppError> {
        let answers = UserAnswers::try_from(request.answers)?;
        let report = self.scorer.score(&answers);
        let risk_flags = RiskFlags::from_report(&report);

        let target = MatchTarget::Percentiles(report.riasec.scores.clone());
        let options = RankOptions {
            risk_flags,
            current_career: None,
        };
        let careers = self.matcher.top(&target, &options, request.career_limit);

        Ok(BigFiveScoreResponse {
            report,
            risk_flags,
            careers,
        })
    }

    pub fn score_mbti(&self, request: MbtiScoreRequest) -> Result<MbtiScoreResponse, AppError> {
        let answers = UserAnswers::try_from(request.answers)?;
        let result = self.mbti.score(&answers, request.language);

        let target = MatchTarget::Code(result.holland_code());
        let careers = self
            .matcher
            .top(&target, &RankOptions::default(), request.career_limit);

        Ok(MbtiScoreResponse { result, careers })
    }

    pub fn rank(&self, request: RankRequest) -> RankResponse {
        let options = RankOptions {
            risk_flags: request.risk_flags,
            current_career: request.current_career,
        };
        let careers = self
            .matcher
            .band(&request.target, &options, request.band, request.limit);

        RankResponse {
            band: request.band,
            careers,
        }
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::standard(ScoringConfig::default())
    }
}
