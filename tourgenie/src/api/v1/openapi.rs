use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TourGenie API",
        version = "1.0.0",
        description = "Travel-information assistant. REST API for guide generation and knowledge-base ingestion.",
    ),
    paths(
        handlers::health::health_check,
        handlers::guide::create_guide,
        handlers::places::ingest_places,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        // Guide
        dto::guide::GuideRequest,
        dto::guide::InputKindDto,
        dto::guide::GuideSectionsDto,
        dto::guide::TravelTipsDto,
        dto::guide::BudgetDto,
        dto::guide::GuideResponse,
        // Places
        dto::places::IngestPlacesRequest,
        dto::places::IngestStatus,
        dto::places::IngestedPlaceDto,
        dto::places::IngestPlacesResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::EmbeddingsStatus,
        handlers::health::LlmStatus,
        handlers::health::IndexStatus,
        handlers::health::PlacesStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "guide", description = "Travel guide generation"),
        (name = "places", description = "Knowledge-base place ingestion"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
