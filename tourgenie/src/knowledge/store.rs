use crate::config::RetrievalConfig;
use crate::embeddings::EmbeddingProvider;
use crate::error::Result;
use crate::knowledge::SearchIndexClient;
use crate::models::IndexedPlace;

/// Vector-indexed knowledge base of tourist attractions.
///
/// Threshold-filtered retrieval trades recall for precision: a hit below
/// `min_score` is treated exactly like "not in the knowledge base", which
/// is what routes the pipeline to the external place lookup.
#[derive(Clone)]
pub struct KnowledgeStore {
    index: SearchIndexClient,
    embeddings: EmbeddingProvider,
    top_k: usize,
    min_score: f32,
    vector_field: String,
}

impl KnowledgeStore {
    pub fn new(
        index: SearchIndexClient,
        embeddings: EmbeddingProvider,
        retrieval: &RetrievalConfig,
    ) -> Self {
        Self {
            index,
            embeddings,
            top_k: retrieval.top_k,
            min_score: retrieval.min_score,
            vector_field: retrieval.vector_field.clone(),
        }
    }

    /// Embed the query, search the index and join the descriptions of all
    /// hits at or above the relevance threshold with newlines.
    ///
    /// An empty string is the valid "no knowledge" signal, not an error.
    pub async fn search_context(&self, query: &str) -> Result<String> {
        let vector = self.embeddings.embed_single(query).await?;
        let hits = self
            .index
            .vector_search(&vector, &self.vector_field, self.top_k)
            .await?;

        let contents: Vec<&str> = hits
            .iter()
            .filter(|hit| hit.score >= self.min_score)
            .filter_map(|hit| hit.description())
            .collect();

        tracing::debug!(
            query = %query,
            hits = hits.len(),
            usable = contents.len(),
            min_score = self.min_score,
            "Knowledge base search"
        );

        Ok(contents.join("\n"))
    }

    /// Add one place document. Failures surface to the caller; re-adding
    /// the same place is not guarded against duplication.
    pub async fn upsert(&self, place: &IndexedPlace) -> Result<()> {
        self.index.upload_documents(std::slice::from_ref(place)).await
    }
}
