//! JSON adapter over the scoring core. No persistence or auth lives here.

pub mod router;
pub mod service;


pub use router::assessment_router;
pub use service::{
    AssessmentService, BigFiveScoreRequest, BigFiveScoreResponse, ItemsView, MbtiScoreRequest,
    MbtiScoreResponse, RankRequest, RankResponse, DEFAULT_CAREER_LIMIT,
};
