use crate::lifecycle::Attempt;
use crate::recommendations::RecommendationQuery;

/// Outbound calls requested by the reducer. Each carries the attempt id
/// that its settled message must echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch tips; `sector` is `None` for the unfiltered (`General`) view.
    FetchMarketTips {
        attempt: Attempt,
        sector: Option<String>,
    },
    /// Submit the recommendation form.
    SubmitRecommendations {
        attempt: Attempt,
        query: RecommendationQuery,
    },
    /// Send one chat message.
    SendChatMessage { attempt: Attempt, message: String },
}
