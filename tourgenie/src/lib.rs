pub mod api;
pub mod archive;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod intelligence;
pub mod knowledge;
pub mod llm;
pub mod models;
pub mod places;
pub mod services;
