//! v1 Places handler.
//!
//! Implements `POST /api/v1/places:ingest`: batch lookup of place names via
//! the external keyword search, archiving and indexing each hit.

use axum::extract::State;

use crate::api::v1::dto::{IngestPlacesRequest, IngestPlacesResponse, IngestedPlaceDto};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::services::IngestOutcome;

/// `POST /api/v1/places:ingest`
///
/// Names are processed sequentially; one failing name does not abort the
/// batch. The response carries a per-name outcome plus summary counts.
#[utoipa::path(
    post,
    path = "/api/v1/places:ingest",
    tag = "places",
    operation_id = "places.ingest",
    request_body = IngestPlacesRequest,
    responses(
        (status = 201, description = "Ingestion results", body = IngestPlacesResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
    security(("bearer_auth" = []))
)]
pub async fn ingest_places(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<IngestPlacesRequest>,
) -> ApiResponse<IngestPlacesResponse> {
    if req.names.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Names cannot be empty");
    }
    if req.names.iter().any(|name| name.trim().is_empty()) {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Names cannot contain blanks");
    }

    let mut results = Vec::with_capacity(req.names.len());
    for name in &req.names {
        let result = match state.guide.ingest_by_name(name.trim()).await {
            Ok(IngestOutcome::Added(record)) => IngestedPlaceDto::added(&record),
            Ok(IngestOutcome::NotFound) => IngestedPlaceDto::not_found(name),
            Err(e) => {
                tracing::error!(place = %name, error = %e, "Place ingestion failed");
                IngestedPlaceDto::failed(name)
            }
        };
        results.push(result);
    }

    let added = count(&results, crate::api::v1::dto::IngestStatus::Added);
    let not_found = count(&results, crate::api::v1::dto::IngestStatus::NotFound);
    let failed = count(&results, crate::api::v1::dto::IngestStatus::Failed);

    ApiResponse::created(IngestPlacesResponse {
        results,
        added,
        not_found,
        failed,
    })
}

fn count(results: &[IngestedPlaceDto], status: crate::api::v1::dto::IngestStatus) -> u32 {
    results.iter().filter(|r| r.status == status).count() as u32
}
