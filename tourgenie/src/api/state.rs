use std::sync::Arc;

use crate::archive::PlaceArchive;
use crate::config::Config;
use crate::embeddings::EmbeddingProvider;
use crate::intelligence::InputClassifier;
use crate::knowledge::{KnowledgeStore, SearchIndexClient};
use crate::llm::LlmProvider;
use crate::places::PlaceSearchClient;
use crate::services::{GuidePresenter, GuideService, PlannerService, TripAdvisor};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub embeddings: EmbeddingProvider,
    pub llm: LlmProvider,
    pub knowledge: KnowledgeStore,
    pub advisor: TripAdvisor,
    pub guide: GuideService,
    pub presenter: GuidePresenter,
}

impl AppState {
    pub fn new(
        config: Config,
        index: SearchIndexClient,
        places: PlaceSearchClient,
        archive: PlaceArchive,
        embeddings: EmbeddingProvider,
        llm: LlmProvider,
    ) -> Self {
        let config = Arc::new(config);
        let knowledge = KnowledgeStore::new(index, embeddings.clone(), &config.retrieval);
        let classifier = InputClassifier::new(llm.clone());
        let guide = GuideService::new(
            classifier.clone(),
            knowledge.clone(),
            places,
            archive,
            embeddings.clone(),
            llm.clone(),
        );
        let planner = PlannerService::new(llm.clone());
        let advisor = TripAdvisor::new(classifier, guide.clone(), planner);
        let presenter = GuidePresenter::new(llm.clone());

        Self {
            config,
            embeddings,
            llm,
            knowledge,
            advisor,
            guide,
            presenter,
        }
    }
}
