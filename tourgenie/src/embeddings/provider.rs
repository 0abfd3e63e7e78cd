use crate::config::{parse_llm_provider_model, EmbeddingsConfig};
use crate::embeddings::api::{ApiConfig, EmbeddingApiClient};
use crate::error::{Result, TourError};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Remote embedding model used for both index queries and place ingestion.
///
/// Stateless wrapper over the `/embeddings` API client; safe to clone and
/// share across requests.
#[derive(Clone)]
pub struct EmbeddingProvider {
    client: EmbeddingApiClient,
    model: String,
}

impl EmbeddingProvider {
    pub fn new(config: &EmbeddingsConfig) -> Result<Self> {
        let (provider, model_name) = parse_llm_provider_model(&config.model);

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url(provider).to_string());

        let needs_api_key = !matches!(
            provider.to_lowercase().as_str(),
            "ollama" | "local" | "lmstudio"
        );
        if needs_api_key && config.api_key.is_none() {
            return Err(TourError::Embedding(
                "API key required for this embedding provider".to_string(),
            ));
        }

        let client = EmbeddingApiClient::new(ApiConfig {
            base_url,
            api_key: config.api_key.clone(),
            model: model_name.to_string(),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        })?;

        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    pub async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.client.embed(texts).await
    }

    pub async fn embed_single(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed(&[text]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| TourError::Embedding("No embedding returned".to_string()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn default_base_url(provider: &str) -> &'static str {
    match provider.to_lowercase().as_str() {
        "ollama" => "http://localhost:11434/v1",
        "lmstudio" => "http://localhost:1234/v1",
        _ => OPENAI_BASE_URL,
    }
}
