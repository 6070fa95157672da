use compass_core::{truncate_description, update, AppState, Msg, DESCRIPTION_LIMIT};
use serde_json::json;

#[test]
fn long_description_is_stored_full_and_truncated_for_display() {
    let long = "x".repeat(DESCRIPTION_LIMIT + 20);
    let (state, _) = update(AppState::new(), Msg::RecommendationsSubmitted);
    let (state, _) = update(
        state,
        Msg::RecommendationsSettled {
            attempt: 1,
            result: Ok(json!({
                "recommendations": [{"title": "T", "short_description": long}]
            })),
        },
    );

    let stored = &state.recommendations().jobs()[0].short_description;
    assert_eq!(stored.chars().count(), DESCRIPTION_LIMIT + 20);

    let shown = &state.view().recommendations.jobs[0].short_description;
    assert_eq!(shown.chars().count(), DESCRIPTION_LIMIT + 1);
    assert!(shown.ends_with('…'));
}

#[test]
fn description_at_the_limit_is_untouched() {
    let exact = "y".repeat(DESCRIPTION_LIMIT);
    assert_eq!(truncate_description(&exact), exact);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let multibyte = "日".repeat(DESCRIPTION_LIMIT + 5);
    let shown = truncate_description(&multibyte);
    assert_eq!(shown.chars().count(), DESCRIPTION_LIMIT + 1);
    assert!(shown.ends_with('…'));
}

#[test]
fn loading_never_coexists_with_results_or_errors() {
    // Snapshot mid-flight: the lifecycle is a single enum, so entering
    // Loading drops whatever was there before.
    let (state, _) = update(AppState::new(), Msg::RecommendationsSubmitted);
    let (state, _) = update(
        state,
        Msg::RecommendationsSettled {
            attempt: 1,
            result: Err("boom".to_string()),
        },
    );
    let (state, _) = update(state, Msg::RecommendationsSubmitted);

    let view = state.view();
    assert!(view.recommendations.loading);
    assert!(view.recommendations.error.is_none());
    assert!(view.recommendations.jobs.is_empty());
}
