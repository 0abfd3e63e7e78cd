//! Place-ingestion DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::PlaceRecord;

/// Request body for `POST /v1/places:ingest`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestPlacesRequest {
    /// Place names to look up and index.
    pub names: Vec<String>,
}

/// Outcome for one requested place name.
///
/// Wire format: `"added"`, `"not_found"`, or `"failed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Added,
    NotFound,
    Failed,
}

/// Per-name result of an ingestion request.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestedPlaceDto {
    pub name: String,
    pub status: IngestStatus,
    /// Address of the place, when the lookup found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Detail page URL, when the lookup found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IngestedPlaceDto {
    pub fn added(record: &PlaceRecord) -> Self {
        Self {
            name: record.name.clone(),
            status: IngestStatus::Added,
            location: Some(record.location.clone()),
            url: Some(record.url.clone()),
        }
    }

    pub fn not_found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: IngestStatus::NotFound,
            location: None,
            url: None,
        }
    }

    pub fn failed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: IngestStatus::Failed,
            location: None,
            url: None,
        }
    }
}

/// Response body for `POST /v1/places:ingest`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngestPlacesResponse {
    pub results: Vec<IngestedPlaceDto>,
    pub added: u32,
    pub not_found: u32,
    pub failed: u32,
}
