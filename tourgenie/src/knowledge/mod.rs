mod client;
mod store;

pub use client::{SearchHit, SearchIndexClient};
pub use store::KnowledgeStore;
