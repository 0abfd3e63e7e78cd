use serde::{Deserialize, Serialize};

/// Outcome of classifying free-text input.
///
/// The classifier model is instructed to answer with exactly one of two
/// labels, but nothing guarantees it complies. Unknown labels are kept
/// verbatim so callers can degrade gracefully instead of crashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Input names a specific tourist attraction.
    Place,
    /// Input describes travel conditions or constraints.
    Condition,
    /// The model emitted something other than the two allowed labels.
    Unclassified(String),
}

impl Classification {
    /// Parse a raw model label. Accepts the Korean production labels and
    /// their English equivalents, case-insensitively, after trimming.
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim();
        match label.to_lowercase().as_str() {
            "장소" | "place" => Self::Place,
            "조건" | "condition" => Self::Condition,
            _ => Self::Unclassified(label.to_string()),
        }
    }
}

/// Best-effort structuring of a guide answer into three labeled sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideSections {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detailed_guide: String,
    #[serde(default)]
    pub additional_info: String,
}

/// Preparation checklist and useful tips for a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTips {
    pub preparation: Vec<String>,
    pub useful_info: Vec<String>,
}

/// Rough per-category budget in won.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetEstimate {
    /// Per night.
    pub accommodation: u64,
    /// Per day.
    pub food: u64,
    /// Round trip.
    pub transport: u64,
}
