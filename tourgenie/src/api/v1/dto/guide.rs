//! Guide request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetEstimate, Classification, GuideSections, TravelTips};

/// Request body for `POST /v1/guide`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideRequest {
    /// Free-text travel question: a place name or a description of travel
    /// conditions.
    pub input: String,
}

/// How the input was routed.
///
/// Wire format: `"place"`, `"condition"`, or `"unclassified"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum InputKindDto {
    Place,
    Condition,
    Unclassified,
}

impl From<&Classification> for InputKindDto {
    fn from(classification: &Classification) -> Self {
        match classification {
            Classification::Place => Self::Place,
            Classification::Condition => Self::Condition,
            Classification::Unclassified(_) => Self::Unclassified,
        }
    }
}

/// Structured view of the answer.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideSectionsDto {
    /// Short summary of the answer.
    pub summary: String,
    /// The full guide text.
    pub detailed_guide: String,
    /// Schedule, nearby places, budget and transport notes.
    pub additional_info: String,
}

impl From<GuideSections> for GuideSectionsDto {
    fn from(sections: GuideSections) -> Self {
        Self {
            summary: sections.summary,
            detailed_guide: sections.detailed_guide,
            additional_info: sections.additional_info,
        }
    }
}

/// Travel tips section of the guide response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TravelTipsDto {
    pub preparation: Vec<String>,
    pub useful_info: Vec<String>,
}

impl From<TravelTips> for TravelTipsDto {
    fn from(tips: TravelTips) -> Self {
        Self {
            preparation: tips.preparation,
            useful_info: tips.useful_info,
        }
    }
}

/// Rough per-category budget estimate in won.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDto {
    /// Accommodation, per night.
    pub accommodation: u64,
    /// Food, per day.
    pub food: u64,
    /// Transport, round trip.
    pub transport: u64,
}

impl From<BudgetEstimate> for BudgetDto {
    fn from(budget: BudgetEstimate) -> Self {
        Self {
            accommodation: budget.accommodation,
            food: budget.food,
            transport: budget.transport,
        }
    }
}

/// Response body for `POST /v1/guide`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    /// The raw pipeline answer. Always populated, even when structuring
    /// failed.
    pub answer: String,
    pub sections: GuideSectionsDto,
    pub tips: TravelTipsDto,
    pub budget: BudgetDto,
    /// Up to five keywords describing the answer.
    pub keywords: Vec<String>,
    /// How the input was classified and routed.
    pub input_kind: InputKindDto,
    /// Wall-clock time spent producing this response, in milliseconds.
    pub timing_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn input_kind_dto_serializes_camel_case() {
        let json = serde_json::to_value(InputKindDto::Place).expect("serialize");
        assert_eq!(json, "place");

        let json = serde_json::to_value(InputKindDto::Unclassified).expect("serialize");
        assert_eq!(json, "unclassified");
    }

    #[test]
    fn input_kind_dto_from_domain() {
        assert_eq!(
            InputKindDto::from(&Classification::Condition),
            InputKindDto::Condition
        );
        assert_eq!(
            InputKindDto::from(&Classification::Unclassified("??".to_string())),
            InputKindDto::Unclassified
        );
    }

    #[test]
    fn guide_request_deserializes() {
        let req: GuideRequest =
            serde_json::from_str(r#"{"input": "경복궁 정보 알려줘"}"#).expect("deserialize");
        assert_eq!(req.input, "경복궁 정보 알려줘");
    }

    #[test]
    fn guide_response_nests_sections_under_camel_case_keys() {
        let resp = GuideResponse {
            answer: "a".to_string(),
            sections: GuideSectionsDto {
                summary: "s".to_string(),
                detailed_guide: "d".to_string(),
                additional_info: "i".to_string(),
            },
            tips: TravelTipsDto {
                preparation: vec![],
                useful_info: vec![],
            },
            budget: BudgetDto {
                accommodation: 1,
                food: 2,
                transport: 3,
            },
            keywords: vec![],
            input_kind: InputKindDto::Place,
            timing_ms: 42,
        };
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["inputKind"], "place");
        assert_eq!(json["timingMs"], 42);
        assert_eq!(json["sections"]["detailedGuide"], "d");
        assert_eq!(json["sections"]["additionalInfo"], "i");
        assert!(json["tips"].get("usefulInfo").is_some());
        assert!(json.get("summary").is_none(), "summary must live under sections");
        assert!(json.get("classification").is_none());
    }
}
