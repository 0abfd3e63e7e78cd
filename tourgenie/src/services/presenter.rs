use std::sync::LazyLock;

use regex::Regex;

use crate::llm::{prompts, CompletionOptions, LlmProvider};
use crate::models::{BudgetEstimate, GuideSections, TravelTips};

const DEFAULT_ADDITIONAL_INFO: &str = "추가 정보를 준비 중입니다.";

/// Best-effort structuring of a pipeline answer for presentation.
///
/// Every method runs a secondary LLM call and swallows its failure,
/// substituting a hardcoded fallback. The user always gets a
/// complete-looking answer even when enrichment fails; the raw answer is
/// what actually carries the information.
#[derive(Clone)]
pub struct GuidePresenter {
    llm: LlmProvider,
}

impl GuidePresenter {
    pub fn new(llm: LlmProvider) -> Self {
        Self { llm }
    }

    /// Split an answer into summary / detailed guide / additional info.
    pub async fn sections(&self, answer: &str) -> GuideSections {
        let options = CompletionOptions {
            temperature: Some(0.3),
            ..Default::default()
        };

        let response = self
            .llm
            .complete_with_system(
                prompts::sections_system_prompt(),
                &prompts::sections_prompt(answer),
                Some(&options),
            )
            .await;

        match response {
            Ok(text) => parse_sections(&text, answer),
            Err(e) => {
                tracing::warn!(error = %e, "Section structuring failed, using fallback");
                fallback_sections(answer)
            }
        }
    }

    /// Preparation checklist and useful tips for the trip.
    pub async fn travel_tips(&self, input: &str, detailed_guide: &str) -> TravelTips {
        let options = CompletionOptions {
            temperature: Some(0.4),
            ..Default::default()
        };

        let response = self
            .llm
            .complete_with_system(
                prompts::tips_system_prompt(),
                &prompts::tips_prompt(input, detailed_guide),
                Some(&options),
            )
            .await;

        match response {
            Ok(text) => parse_tips(&text).unwrap_or_else(default_tips),
            Err(e) => {
                tracing::warn!(error = %e, "Travel tip generation failed, using fallback");
                default_tips()
            }
        }
    }

    /// Rough budget estimate in won.
    pub async fn budget_estimate(&self, input: &str, additional_info: &str) -> BudgetEstimate {
        let options = CompletionOptions {
            temperature: Some(0.3),
            ..Default::default()
        };

        let response = self
            .llm
            .complete_with_system(
                prompts::budget_system_prompt(),
                &prompts::budget_prompt(input, additional_info),
                Some(&options),
            )
            .await;

        match response {
            Ok(text) => parse_budget(&text).unwrap_or_else(default_budget),
            Err(e) => {
                tracing::warn!(error = %e, "Budget estimation failed, using fallback");
                default_budget()
            }
        }
    }

    /// Up to five keywords for the answer summary.
    pub async fn keywords(&self, summary: &str) -> Vec<String> {
        let options = CompletionOptions {
            temperature: Some(0.3),
            ..Default::default()
        };

        let response = self
            .llm
            .complete_with_system(
                prompts::keywords_system_prompt(),
                &prompts::keywords_prompt(summary),
                Some(&options),
            )
            .await;

        match response {
            Ok(text) => {
                let keywords = parse_keywords(&text);
                if keywords.is_empty() {
                    default_keywords()
                } else {
                    keywords
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Keyword extraction failed, using fallback");
                default_keywords()
            }
        }
    }
}

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid fence regex"));
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"));

/// Pull the JSON object out of a model response that may wrap it in a
/// ```json fence or surround it with prose.
fn extract_json(text: &str) -> Option<String> {
    if let Some(captures) = JSON_FENCE.captures(text) {
        return captures.get(1).map(|m| m.as_str().to_string());
    }

    JSON_OBJECT.find(text).map(|found| found.as_str().to_string())
}

fn parse_sections(text: &str, answer: &str) -> GuideSections {
    let Some(json) = extract_json(text) else {
        return fallback_sections(answer);
    };

    let Ok(mut sections) = serde_json::from_str::<GuideSections>(&json) else {
        return fallback_sections(answer);
    };

    sections.summary = sections.summary.trim().to_string();
    sections.detailed_guide = sections.detailed_guide.trim().to_string();
    sections.additional_info = sections.additional_info.trim().to_string();

    if sections.summary.is_empty() {
        sections.summary = truncate(answer, 200);
    }
    if sections.detailed_guide.is_empty() {
        sections.detailed_guide = answer.to_string();
    }
    if sections.additional_info.is_empty() {
        sections.additional_info = DEFAULT_ADDITIONAL_INFO.to_string();
    }

    sections
}

fn fallback_sections(answer: &str) -> GuideSections {
    GuideSections {
        summary: truncate(answer, 300),
        detailed_guide: answer.to_string(),
        additional_info: DEFAULT_ADDITIONAL_INFO.to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

fn parse_tips(text: &str) -> Option<TravelTips> {
    let preparation_start = text.find("PREPARATION:")?;
    let rest = &text[preparation_start + "PREPARATION:".len()..];

    let (preparation_block, useful_block) = match rest.find("USEFUL_INFO:") {
        Some(idx) => (&rest[..idx], &rest[idx + "USEFUL_INFO:".len()..]),
        None => (rest, ""),
    };

    let preparation = bullet_lines(preparation_block);
    let useful_info = bullet_lines(useful_block);

    if preparation.is_empty() {
        return None;
    }

    Some(TravelTips {
        preparation,
        useful_info: if useful_info.is_empty() {
            default_tips().useful_info
        } else {
            useful_info
        },
    })
}

fn bullet_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| line.trim().trim_start_matches('-').trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn parse_budget(text: &str) -> Option<BudgetEstimate> {
    let parts: Vec<u64> = text
        .trim()
        .split(',')
        .take(3)
        .map(|part| part.trim().parse().ok())
        .collect::<Option<Vec<u64>>>()?;

    if parts.len() < 3 {
        return None;
    }

    Some(BudgetEstimate {
        accommodation: parts[0],
        food: parts[1],
        transport: parts[2],
    })
}

fn parse_keywords(text: &str) -> Vec<String> {
    text.trim()
        .split(',')
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .take(5)
        .map(|kw| kw.to_string())
        .collect()
}

fn default_tips() -> TravelTips {
    TravelTips {
        preparation: vec![
            "여권/신분증 확인".to_string(),
            "숙박 예약 확인".to_string(),
            "교통편 예약".to_string(),
            "여행 보험 가입".to_string(),
        ],
        useful_info: vec![
            "현지 앱 다운로드".to_string(),
            "결제수단 준비".to_string(),
            "오프라인 지도 다운로드".to_string(),
            "비상연락처 메모".to_string(),
        ],
    }
}

fn default_budget() -> BudgetEstimate {
    BudgetEstimate {
        accommodation: 150_000,
        food: 80_000,
        transport: 50_000,
    }
}

fn default_keywords() -> Vec<String> {
    vec!["여행".to_string(), "관광".to_string(), "정보".to_string()]
}
