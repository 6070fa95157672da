use log::debug;

use crate::{normalize, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RecommendationFieldEdited { field, value } => {
            state.recommendations.edit_field(field, value);
            Vec::new()
        }
        Msg::RecommendationsSubmitted => {
            // Empty fields are deliberately allowed through; the service
            // decides relevance.
            let (attempt, query) = state.recommendations.begin_submit();
            vec![Effect::SubmitRecommendations { attempt, query }]
        }
        Msg::RecommendationsSettled { attempt, result } => {
            let result = result.map(|body| normalize::job_listings(&body));
            if !state.recommendations.settle(attempt, result) {
                debug!("discarding superseded recommendations response (attempt {attempt})");
            }
            Vec::new()
        }
        Msg::SectorSelected(sector) => {
            let attempt = state.market_tips.begin_fetch(sector);
            vec![Effect::FetchMarketTips {
                attempt,
                sector: sector.filter_param().map(ToOwned::to_owned),
            }]
        }
        Msg::TipsSettled { attempt, result } => {
            let result = result.map(|body| normalize::market_tips(&body));
            if !state.market_tips.settle(attempt, result) {
                debug!("discarding superseded market-tips response (attempt {attempt})");
            }
            Vec::new()
        }
        Msg::ChatDraftEdited(text) => {
            state.conversation.edit_draft(text);
            Vec::new()
        }
        Msg::ChatSubmitted => match state.conversation.begin_send() {
            Some((attempt, message)) => vec![Effect::SendChatMessage { attempt, message }],
            None => Vec::new(),
        },
        Msg::ChatSettled { attempt, result } => {
            let result = result.and_then(|body| normalize::chat_reply(&body));
            if !state.conversation.settle(attempt, result) {
                debug!("discarding chat response for stale attempt {attempt}");
            }
            Vec::new()
        }
    };

    (state, effects)
}
