use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::service::{AssessmentService, BigFiveScoreRequest, MbtiScoreRequest, RankRequest};
use crate::assessment::AssessmentKind;

/// Router builder exposing scoring and ranking endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments/big-five/items", get(big_five_items_handler))
        .route("/api/v1/assessments/mbti/items", get(mbti_items_handler))
        .route("/api/v1/assessments/big-five/score", post(big_five_handler))
        .route("/api/v1/assessments/mbti/score", post(mbti_handler))
        .route("/api/v1/careers/rank", post(rank_handler))
        .with_state(service)
}

pub(crate) async fn big_five_items_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    (StatusCode::OK, Json(service.items(AssessmentKind::BigFive))).into_response()
}

pub(crate) async fn mbti_items_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, Json(service.items(AssessmentKind::Mbti))).into_response()
}

pub(crate) async fn big_five_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<BigFiveScoreRequest>,
) -> Response {
    match service.score_big_five(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn mbti_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<MbtiScoreRequest>,
) -> Response {
    match service.score_mbti(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub(crate) async fn rank_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<RankRequest>,
) -> Response {
    (StatusCode::OK, Json(service.rank(request))).into_response()
}
