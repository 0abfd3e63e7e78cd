use crate::intelligence::InputClassifier;
use crate::models::Classification;
use crate::services::guide::GuideService;
use crate::services::planner::PlannerService;

/// Fixed reply when no pipeline produced an answer.
pub const FALLBACK_ANSWER: &str = "응답을 생성할 수 없습니다.";

/// Fixed reply when the classifier emitted neither allowed label.
pub const UNCLASSIFIED_MESSAGE: &str = "입력 유형을 분류하지 못했어요. 다시 시도해주세요.";

#[derive(Debug, Clone)]
pub struct AdvisorReply {
    pub classification: Classification,
    pub answer: String,
}

/// Explicit two-branch dispatcher over the two pipelines.
///
/// Classifies the input once, then invokes exactly one pipeline. This
/// replaces an open-ended tool-selection loop: with a fixed two-tool menu
/// the deterministic dispatch is strictly easier to reason about and test.
/// Pipeline failures degrade to a fixed answer string, never a crash.
#[derive(Clone)]
pub struct TripAdvisor {
    classifier: InputClassifier,
    guide: GuideService,
    planner: PlannerService,
}

impl TripAdvisor {
    pub fn new(classifier: InputClassifier, guide: GuideService, planner: PlannerService) -> Self {
        Self {
            classifier,
            guide,
            planner,
        }
    }

    pub async fn advise(&self, input: &str) -> AdvisorReply {
        let classification = match self.classifier.classify(input).await {
            Ok(classification) => classification,
            Err(e) => {
                tracing::error!(error = %e, "Input classification failed");
                return AdvisorReply {
                    classification: Classification::Unclassified(String::new()),
                    answer: FALLBACK_ANSWER.to_string(),
                };
            }
        };

        let answer = match &classification {
            Classification::Place => self.guide.search_tour_guide(input).await,
            Classification::Condition => self.planner.recommend_trip_plan(input).await,
            Classification::Unclassified(label) => {
                tracing::warn!(label = %label, "Classifier emitted an unexpected label");
                return AdvisorReply {
                    classification,
                    answer: UNCLASSIFIED_MESSAGE.to_string(),
                };
            }
        };

        let answer = match answer {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(error = %e, "Pipeline failed");
                FALLBACK_ANSWER.to_string()
            }
        };

        AdvisorReply {
            classification,
            answer,
        }
    }
}
