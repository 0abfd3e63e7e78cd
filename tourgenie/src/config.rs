use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: Option<LlmConfig>,
    pub embeddings: EmbeddingsConfig,
    pub index: IndexConfig,
    pub places: PlacesConfig,
    pub retrieval: RetrievalConfig,
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_keys: Vec<String>,
}

/// LLM configuration for the chat/completion model.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

/// Remote embedding endpoint (OpenAI-style `/embeddings`).
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

/// Vector search index holding the tour knowledge base.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub endpoint: String,
    pub index_name: String,
    pub api_key: Option<String>,
    pub api_version: String,
    pub timeout_secs: u64,
}

/// Keyword place-search API (Kakao Local dialect).
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Category group restricting results to tourist attractions.
    pub category_group_code: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Number of nearest neighbors requested from the index.
    pub top_k: usize,
    /// Minimum `@search.score` a hit must reach to be used as context.
    pub min_score: f32,
    /// Index field the query vector is compared against.
    pub vector_field: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("TOURGENIE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("TOURGENIE_PORT", 3000),
                api_keys: env::var("TOURGENIE_API_KEYS")
                    .map(|keys| keys.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
            },
            llm: env::var("LLM_MODEL").ok().map(|model| LlmConfig {
                model,
                api_key: env::var("LLM_API_KEY").ok(),
                base_url: env::var("LLM_BASE_URL").ok(),
                timeout_secs: parse_env_or("LLM_TIMEOUT", 30),
                max_retries: parse_env_or("LLM_MAX_RETRIES", 3),
            }),
            embeddings: EmbeddingsConfig {
                model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "openai/text-embedding-3-small".to_string()),
                api_key: env::var("EMBEDDING_API_KEY")
                    .ok()
                    .or_else(|| env::var("LLM_API_KEY").ok()),
                base_url: env::var("EMBEDDING_BASE_URL").ok(),
                timeout_secs: parse_env_or("EMBEDDING_TIMEOUT", 30),
                max_retries: parse_env_or("EMBEDDING_MAX_RETRIES", 3),
            },
            index: IndexConfig {
                endpoint: env::var("SEARCH_INDEX_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:9200".to_string()),
                index_name: env::var("SEARCH_INDEX_NAME")
                    .unwrap_or_else(|_| "tour-knowledge".to_string()),
                api_key: env::var("SEARCH_INDEX_API_KEY").ok(),
                api_version: env::var("SEARCH_INDEX_API_VERSION")
                    .unwrap_or_else(|_| "2024-07-01".to_string()),
                timeout_secs: parse_env_or("SEARCH_INDEX_TIMEOUT", 30),
            },
            places: PlacesConfig {
                base_url: env::var("PLACES_BASE_URL")
                    .unwrap_or_else(|_| "https://dapi.kakao.com".to_string()),
                api_key: env::var("PLACES_API_KEY").ok(),
                category_group_code: env::var("PLACES_CATEGORY_GROUP")
                    .unwrap_or_else(|_| "AT4".to_string()),
                timeout_secs: parse_env_or("PLACES_TIMEOUT", 10),
            },
            retrieval: RetrievalConfig {
                top_k: parse_env_or("RETRIEVAL_TOP_K", 3),
                min_score: parse_env_or("RETRIEVAL_MIN_SCORE", 0.9),
                vector_field: env::var("RETRIEVAL_VECTOR_FIELD")
                    .unwrap_or_else(|_| "contentVector".to_string()),
            },
            archive: ArchiveConfig {
                path: env::var("ARCHIVE_PATH").unwrap_or_else(|_| "tour_data.json".to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Known LLM/embedding providers that use OpenAI-compatible APIs
pub const KNOWN_LLM_PROVIDERS: &[&str] = &["openai", "openrouter", "ollama", "lmstudio"];

/// Parse a model name into (provider, model) tuple.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    // Default to treating the whole string as a local model
    ("local", model)
}
