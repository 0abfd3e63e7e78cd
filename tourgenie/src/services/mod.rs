mod advisor;
mod guide;
mod planner;
mod presenter;

pub use advisor::{AdvisorReply, TripAdvisor, FALLBACK_ANSWER, UNCLASSIFIED_MESSAGE};
pub use guide::{not_found_message, GuideService, IngestOutcome, ADDED_MESSAGE};
pub use planner::PlannerService;
pub use presenter::GuidePresenter;
