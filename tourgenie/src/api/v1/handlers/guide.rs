//! v1 Guide handler.
//!
//! Implements `POST /api/v1/guide`: classify the input, run the matching
//! pipeline and structure the answer into presentation sections.

use std::time::Instant;

use axum::extract::State;

use crate::api::v1::dto::{GuideRequest, GuideResponse, InputKindDto};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `POST /api/v1/guide`
///
/// The answer is always produced, falling back to fixed messages when a
/// pipeline or the structuring calls fail. Only an empty input is rejected.
#[utoipa::path(
    post,
    path = "/api/v1/guide",
    tag = "guide",
    operation_id = "guide.create",
    request_body = GuideRequest,
    responses(
        (status = 200, description = "Structured travel guide", body = GuideResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_guide(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<GuideRequest>,
) -> ApiResponse<GuideResponse> {
    let input = req.input.trim();
    if input.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Input cannot be empty");
    }

    let started = Instant::now();
    let reply = state.advisor.advise(input).await;

    // Presentation enrichment is best-effort: each call degrades to a fixed
    // fallback on its own, so the response below is always complete.
    let sections = state.presenter.sections(&reply.answer).await;
    let tips = state
        .presenter
        .travel_tips(input, &sections.detailed_guide)
        .await;
    let budget = state
        .presenter
        .budget_estimate(input, &sections.additional_info)
        .await;
    let keywords = state.presenter.keywords(&sections.summary).await;

    ApiResponse::success(GuideResponse {
        input_kind: InputKindDto::from(&reply.classification),
        answer: reply.answer,
        sections: sections.into(),
        tips: tips.into(),
        budget: budget.into(),
        keywords,
        timing_ms: started.elapsed().as_millis() as u64,
    })
}
