use serde_json::Value;

use crate::lifecycle::Attempt;
use crate::market_tips::Sector;
use crate::recommendations::QueryField;

/// Everything that can drive the state machine: user intents plus settled
/// outbound calls. Settled messages carry the attempt id stamped onto the
/// effect that produced them so stale results can be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited one of the recommendation form inputs.
    RecommendationFieldEdited { field: QueryField, value: String },
    /// User submitted the recommendation form.
    RecommendationsSubmitted,
    /// A recommendations call settled.
    RecommendationsSettled {
        attempt: Attempt,
        result: Result<Value, String>,
    },
    /// User picked a sector; the selection itself triggers the fetch.
    SectorSelected(Sector),
    /// A market-tips call settled.
    TipsSettled {
        attempt: Attempt,
        result: Result<Value, String>,
    },
    /// User edited the chat input.
    ChatDraftEdited(String),
    /// User sent the current chat draft.
    ChatSubmitted,
    /// A chat call settled.
    ChatSettled {
        attempt: Attempt,
        result: Result<Value, String>,
    },
}
