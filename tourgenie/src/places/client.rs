use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::Deserialize;
use std::time::Duration;

use crate::config::PlacesConfig;
use crate::error::{Result, TourError};
use crate::models::PlaceRecord;

#[derive(Debug, Deserialize)]
struct KeywordSearchResponse {
    #[serde(default)]
    documents: Vec<PlaceDocument>,
}

#[derive(Debug, Deserialize)]
struct PlaceDocument {
    place_name: String,
    address_name: String,
    place_url: String,
}

/// Keyword place-search API client (Kakao Local dialect).
///
/// Results are restricted to one fixed tourist-attraction category and only
/// the first hit is taken; there is no ranking or disambiguation logic.
#[derive(Clone)]
pub struct PlaceSearchClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    category_group_code: String,
}

impl PlaceSearchClient {
    pub fn new(config: &PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TourError::Places(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            category_group_code: config.category_group_code.clone(),
        })
    }

    /// Look up the best-matching tourist attraction for a query.
    ///
    /// Returns `None` when the API has no match. The description is
    /// synthesized from a template; the upstream API does not provide one.
    pub async fn search_place(&self, query: &str) -> Result<Option<PlaceRecord>> {
        let url = format!("{}/v2/local/search/keyword.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .query(&[
                ("query", query),
                ("category_group_code", &self.category_group_code),
                ("size", "1"),
            ])
            .send()
            .await
            .map_err(|e| TourError::Places(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(TourError::ApiAuth(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TourError::Places(format!("API error {status}: {body}")));
        }

        let body: KeywordSearchResponse = response
            .json()
            .await
            .map_err(|e| TourError::Places(format!("Failed to parse response: {e}")))?;

        let Some(place) = body.documents.into_iter().next() else {
            tracing::debug!(query = %query, "Place search returned no documents");
            return Ok(None);
        };

        Ok(Some(PlaceRecord {
            description: format!(
                "{}은 {}에 위치한 관광명소입니다.",
                place.place_name, place.address_name
            ),
            name: place.place_name,
            location: place.address_name,
            url: place.place_url,
            hours: None,
            highlights: Vec::new(),
            nearby: Vec::new(),
        }))
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(ref api_key) = self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("KakaoAK {api_key}"))
                    .map_err(|e| TourError::Places(format!("Invalid API key header: {e}")))?,
            );
        }
        Ok(headers)
    }
}
