use crate::error::Result;
use crate::llm::{prompts, LlmProvider};

/// Condition-path pipeline: one completion with the travel-advisor system
/// prompt and the raw user input. No retrieval is involved.
#[derive(Clone)]
pub struct PlannerService {
    llm: LlmProvider,
}

impl PlannerService {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    pub async fn recommend_trip_plan(&self, input: &str) -> Result<String> {
        self.llm
            .complete_with_system(prompts::travel_advisor_system_prompt(), input, None)
            .await
    }
}
