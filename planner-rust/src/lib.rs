mod blueprint;
mod chat;
mod completion;
mod description;
mod errors;
mod fallback;
mod generator;
mod insights;
mod params;
mod planner;
mod questionnaire;

pub use blueprint::*;
pub use chat::{ChatMessage, ChatRelay, ChatReply, ChatRole, EventContext};
pub use completion::{Generated, SharedModel, Source};
pub use description::{template_description, DescriptionWriter, EventDetails, GENERIC_DESCRIPTION};
pub use errors::*;
pub use fallback::{allocate, synthesize_blueprint, BUDGET_SPLIT};
pub use generator::{parse_blueprint, BlueprintGenerator};
pub use insights::*;
pub use params::{CompletionParams, DEFAULT_TIMEOUT};
pub use planner::{EventPlanner, PlannerParams};
pub use questionnaire::*;
