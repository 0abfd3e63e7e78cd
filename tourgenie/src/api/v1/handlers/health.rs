use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::ApiResponse;
use crate::llm::LlmBackend;

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub embeddings: EmbeddingsStatus,
    pub llm: LlmStatus,
    pub index: IndexStatus,
    pub places: PlacesStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EmbeddingsStatus {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LlmStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct IndexStatus {
    pub status: String,
    pub index_name: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PlacesStatus {
    pub status: String,
}

/// `GET /api/v1/health`
///
/// Reports configuration status only; no outbound calls are made, so a
/// healthy response does not guarantee the upstream services are reachable.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let embeddings_status = EmbeddingsStatus {
        status: if state.config.embeddings.api_key.is_some() {
            "configured".to_string()
        } else {
            "no_api_key".to_string()
        },
        model: state.config.embeddings.model.clone(),
    };

    let llm_status = if state.llm.is_available() {
        let provider = match state.llm.backend() {
            LlmBackend::OpenAI => "openai",
            LlmBackend::OpenRouter => "openrouter",
            LlmBackend::Ollama => "ollama",
            LlmBackend::LmStudio => "lmstudio",
            LlmBackend::OpenAICompatible { .. } => "openai-compatible",
            LlmBackend::Unavailable { .. } => "unavailable",
        };
        let model = state.llm.config().map(|c| c.model.clone());
        LlmStatus {
            status: "available".to_string(),
            provider: Some(provider.to_string()),
            model,
        }
    } else {
        LlmStatus {
            status: "unavailable".to_string(),
            provider: None,
            model: None,
        }
    };

    let index_status = IndexStatus {
        status: if state.config.index.api_key.is_some() {
            "configured".to_string()
        } else {
            "no_api_key".to_string()
        },
        index_name: state.config.index.index_name.clone(),
    };

    let places_status = PlacesStatus {
        status: if state.config.places.api_key.is_some() {
            "configured".to_string()
        } else {
            "no_api_key".to_string()
        },
    };

    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        embeddings: embeddings_status,
        llm: llm_status,
        index: index_status,
        places: places_status,
    })
}
