use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::IndexConfig;
use crate::error::{Result, TourError};
use crate::models::IndexedPlace;

/// One hit from a vector similarity search: the relevance score plus the
/// stored document fields, kept as raw JSON since the index schema is
/// configured externally.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "@search.score", default)]
    pub score: f32,
    #[serde(flatten)]
    pub document: serde_json::Map<String, serde_json::Value>,
}

impl SearchHit {
    pub fn description(&self) -> Option<&str> {
        self.document.get("description").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct IndexingResponse {
    #[serde(default)]
    value: Vec<IndexingResult>,
}

#[derive(Debug, Deserialize)]
struct IndexingResult {
    #[serde(default)]
    key: String,
    #[serde(default)]
    status: bool,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

#[derive(Debug, Serialize)]
struct VectorQuery<'a> {
    kind: &'static str,
    vector: &'a [f32],
    fields: &'a str,
    k: usize,
}

/// REST client for the hosted vector search index.
///
/// Speaks the search-service dialect: `POST .../docs/search` for queries
/// (hits carry an `@search.score`), `POST .../docs/index` with
/// `@search.action` envelopes for uploads, `api-key` header auth.
#[derive(Clone)]
pub struct SearchIndexClient {
    client: Client,
    endpoint: String,
    index_name: String,
    api_key: Option<String>,
    api_version: String,
}

impl SearchIndexClient {
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TourError::Index(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Nearest-neighbor search over the given vector field. Returns raw
    /// hits; score filtering is the caller's concern.
    pub async fn vector_search(
        &self,
        vector: &[f32],
        field: &str,
        k: usize,
    ) -> Result<Vec<SearchHit>> {
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index_name, self.api_version
        );

        let body = json!({
            "search": "",
            "vectorQueries": [VectorQuery {
                kind: "vector",
                vector,
                fields: field,
                k,
            }],
        });

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.map_status(status, body));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| TourError::Index(format!("Failed to parse search response: {e}")))?;

        Ok(parsed.value)
    }

    /// Upload documents to the index. Any per-document failure surfaces as
    /// an error; nothing is retried.
    pub async fn upload_documents(&self, documents: &[IndexedPlace]) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let url = format!(
            "{}/indexes/{}/docs/index?api-version={}",
            self.endpoint, self.index_name, self.api_version
        );

        let actions: Vec<serde_json::Value> = documents
            .iter()
            .map(|doc| {
                let mut value = serde_json::to_value(doc)?;
                value
                    .as_object_mut()
                    .ok_or_else(|| {
                        TourError::Index("Document did not serialize to an object".to_string())
                    })?
                    .insert("@search.action".to_string(), json!("upload"));
                Ok(value)
            })
            .collect::<Result<_>>()?;

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&json!({ "value": actions }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.map_status(status, body));
        }

        let parsed: IndexingResponse = response
            .json()
            .await
            .map_err(|e| TourError::Index(format!("Failed to parse indexing response: {e}")))?;

        let failures: Vec<String> = parsed
            .value
            .iter()
            .filter(|r| !r.status)
            .map(|r| {
                format!(
                    "{}: {}",
                    r.key,
                    r.error_message.as_deref().unwrap_or("unknown error")
                )
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TourError::Index(format!(
                "Document upload failed for {}",
                failures.join("; ")
            )))
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(ref api_key) = self.api_key {
            headers.insert(
                "api-key",
                HeaderValue::from_str(api_key)
                    .map_err(|e| TourError::Index(format!("Invalid API key header: {e}")))?,
            );
        }
        Ok(headers)
    }

    fn map_status(&self, status: reqwest::StatusCode, body: String) -> TourError {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            TourError::ApiAuth(body)
        } else {
            TourError::Index(format!("Index error {status}: {body}"))
        }
    }
}
