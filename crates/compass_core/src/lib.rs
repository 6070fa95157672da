//! Compass core: pure request/state orchestration for the career client.
mod conversation;
mod effect;
mod lifecycle;
mod market_tips;
mod msg;
pub mod normalize;
mod recommendations;
mod state;
mod update;
mod view_model;

pub use conversation::{ConversationState, Speaker, TranscriptEntry};
pub use effect::Effect;
pub use lifecycle::{Attempt, RequestLifecycle, RequestState};
pub use market_tips::{MarketTip, MarketTipsState, Sector};
pub use msg::Msg;
pub use recommendations::{JobListing, QueryField, RecommendationQuery, RecommendationState};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    truncate_description, AppViewModel, ConversationView, JobCardView, MarketTipsView,
    RecommendationsView, DESCRIPTION_LIMIT,
};
