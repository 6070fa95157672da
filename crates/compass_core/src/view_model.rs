use crate::conversation::TranscriptEntry;
use crate::lifecycle::RequestState;
use crate::market_tips::{MarketTip, Sector};
use crate::recommendations::{JobListing, RecommendationQuery};
use crate::state::AppState;

/// Longest description shown on a job card before truncation.
pub const DESCRIPTION_LIMIT: usize = 180;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub recommendations: RecommendationsView,
    pub market_tips: MarketTipsView,
    pub conversation: ConversationView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationsView {
    pub form: RecommendationQuery,
    pub loading: bool,
    pub error: Option<String>,
    pub jobs: Vec<JobCardView>,
    /// A submitted query settled successfully with nothing to show.
    /// False until the first submission.
    pub no_results: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub company: String,
    /// Display copy of the description, truncated to `DESCRIPTION_LIMIT`
    /// characters. The stored entity keeps the full text.
    pub short_description: String,
    pub relevance_notes: Option<String>,
    pub skills: Vec<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketTipsView {
    pub sector: Sector,
    pub loading: bool,
    pub error: Option<String>,
    pub tips: Vec<MarketTip>,
    pub no_tips: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationView {
    pub draft: String,
    pub sending: bool,
    pub transcript: Vec<TranscriptEntry>,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let rec = &state.recommendations;
    let recommendations = RecommendationsView {
        form: rec.form().clone(),
        loading: rec.request().is_loading(),
        error: rec.request().error().map(ToOwned::to_owned),
        jobs: rec.jobs().iter().map(job_card).collect(),
        no_results: rec.submitted() && settled_empty(rec.request()),
    };

    let tips = &state.market_tips;
    let market_tips = MarketTipsView {
        sector: tips.sector(),
        loading: tips.request().is_loading(),
        error: tips.request().error().map(ToOwned::to_owned),
        tips: tips.tips().to_vec(),
        no_tips: settled_empty(tips.request()),
    };

    let chat = &state.conversation;
    let conversation = ConversationView {
        draft: chat.draft().to_string(),
        sending: chat.is_sending(),
        transcript: chat.transcript().to_vec(),
    };

    AppViewModel {
        recommendations,
        market_tips,
        conversation,
    }
}

fn settled_empty<T>(request: &RequestState<Vec<T>>) -> bool {
    matches!(request, RequestState::Success(items) if items.is_empty())
}

fn job_card(job: &JobListing) -> JobCardView {
    JobCardView {
        title: job.title.clone(),
        company: job.company.clone(),
        short_description: truncate_description(&job.short_description),
        relevance_notes: job.relevance_notes.clone(),
        skills: job.skills.clone(),
        url: job.url.clone(),
        logo_url: job.logo_url.clone(),
    }
}

/// Truncates a description for display, leaving the stored value intact.
/// Counts characters, not bytes, so multi-byte text never splits.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    truncated.push(ELLIPSIS);
    truncated
}
