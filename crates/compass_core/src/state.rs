use crate::conversation::ConversationState;
use crate::market_tips::MarketTipsState;
use crate::recommendations::RecommendationState;
use crate::view_model::{self, AppViewModel};

/// The whole client state. Each controller owns its slice exclusively; the
/// only mutation path is the pure `update` function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) recommendations: RecommendationState,
    pub(crate) market_tips: MarketTipsState,
    pub(crate) conversation: ConversationState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot for presentation.
    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn recommendations(&self) -> &RecommendationState {
        &self.recommendations
    }

    pub fn market_tips(&self) -> &MarketTipsState {
        &self.market_tips
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }
}
