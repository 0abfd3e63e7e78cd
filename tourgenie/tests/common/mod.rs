//! Shared helpers for integration tests: config builders pointing at
//! wiremock servers and canned upstream response bodies.

#![allow(dead_code)]

use serde_json::json;

use tourgenie::config::{EmbeddingsConfig, IndexConfig, LlmConfig, PlacesConfig, RetrievalConfig};

pub fn llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        model: "openai/gpt-4o-mini".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
        max_retries: 0,
    }
}

pub fn embeddings_config(base_url: &str) -> EmbeddingsConfig {
    EmbeddingsConfig {
        model: "openai/text-embedding-3-small".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
        max_retries: 0,
    }
}

pub fn index_config(endpoint: &str) -> IndexConfig {
    IndexConfig {
        endpoint: endpoint.to_string(),
        index_name: "tour-knowledge".to_string(),
        api_key: Some("index-key".to_string()),
        api_version: "2024-07-01".to_string(),
        timeout_secs: 5,
    }
}

pub fn places_config(base_url: &str) -> PlacesConfig {
    PlacesConfig {
        base_url: base_url.to_string(),
        api_key: Some("kakao-test-key".to_string()),
        category_group_code: "AT4".to_string(),
        timeout_secs: 5,
    }
}

pub fn retrieval_config() -> RetrievalConfig {
    RetrievalConfig {
        top_k: 3,
        min_score: 0.9,
        vector_field: "contentVector".to_string(),
    }
}

/// OpenAI-style chat completion body with the given assistant content.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "gpt-4o-mini",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

/// OpenAI-style `/embeddings` body carrying one vector per input.
pub fn embedding_body(vector: &[f32]) -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            {
                "object": "embedding",
                "index": 0,
                "embedding": vector
            }
        ],
        "model": "text-embedding-3-small",
        "usage": { "prompt_tokens": 1, "total_tokens": 1 }
    })
}

/// Vector-search response with `(score, description)` hits.
pub fn search_hits_body(hits: &[(f64, &str)]) -> serde_json::Value {
    let value: Vec<serde_json::Value> = hits
        .iter()
        .enumerate()
        .map(|(i, (score, description))| {
            json!({
                "@search.score": score,
                "id": format!("doc-{i}"),
                "name": format!("place-{i}"),
                "description": description
            })
        })
        .collect();
    json!({ "value": value })
}

/// Successful document-upload response for one document.
pub fn upload_ok_body(key: &str) -> serde_json::Value {
    json!({
        "value": [
            {
                "key": key,
                "status": true,
                "errorMessage": null,
                "statusCode": 201
            }
        ]
    })
}

/// Keyword place-search response with a single document.
pub fn keyword_search_body(name: &str, address: &str, url: &str) -> serde_json::Value {
    json!({
        "documents": [
            {
                "place_name": name,
                "address_name": address,
                "place_url": url,
                "category_group_code": "AT4"
            }
        ],
        "meta": { "total_count": 1, "is_end": true }
    })
}

/// Keyword place-search response with no matches.
pub fn keyword_search_empty_body() -> serde_json::Value {
    json!({
        "documents": [],
        "meta": { "total_count": 0, "is_end": true }
    })
}
