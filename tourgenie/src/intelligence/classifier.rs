use crate::error::Result;
use crate::llm::{prompts, CompletionOptions, LlmProvider};
use crate::models::Classification;

/// LLM-backed classifier and entity extractor for free-text travel input.
#[derive(Clone)]
pub struct InputClassifier {
    llm: LlmProvider,
}

impl InputClassifier {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Decide whether the input names a place or describes travel
    /// conditions. The model output is trimmed and matched against the two
    /// allowed labels; anything else comes back as
    /// [`Classification::Unclassified`] for the caller to handle.
    pub async fn classify(&self, input: &str) -> Result<Classification> {
        let options = CompletionOptions {
            temperature: Some(0.0),
            ..Default::default()
        };
        let label = self
            .llm
            .complete_with_system(prompts::classify_system_prompt(), input, Some(&options))
            .await?;

        let classification = Classification::from_label(&label);
        tracing::debug!(input = %input, label = %label.trim(), "Classified input");
        Ok(classification)
    }

    /// Extract just the place name from a sentence. The trimmed model
    /// output is returned verbatim; there is no retry on malformed output.
    pub async fn extract_place_name(&self, input: &str) -> Result<String> {
        let options = CompletionOptions {
            temperature: Some(0.0),
            ..Default::default()
        };
        let name = self
            .llm
            .complete_with_system(
                prompts::extract_place_system_prompt(),
                input,
                Some(&options),
            )
            .await?;

        Ok(name.trim().to_string())
    }
}
