use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::domain::AssessmentRequest;
use super::oracle::AssessmentOracle;
use super::service::AssessmentService;
use crate::error::AppError;

/// Router builder exposing the assessment endpoint.
pub fn assessment_router<O>(service: Arc<AssessmentService<O>>) -> Router
where
    O: AssessmentOracle + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<O>))
        .with_state(service)
}

pub(crate) async fn assess_handler<O>(
    State(service): State<Arc<AssessmentService<O>>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    O: AssessmentOracle + 'static,
{
    let Json(request) = payload?;
    // Oracles may block on network I/O.
    let outcome = tokio::task::spawn_blocking(move || service.assess(&request)).await?;
    Ok((StatusCode::OK, Json(outcome)).into_response())
}
