use std::sync::Once;

use compass_core::{update, AppState, Effect, MarketTip, Msg, RequestState, Sector};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn select(state: AppState, sector: Sector) -> (AppState, Vec<Effect>) {
    update(state, Msg::SectorSelected(sector))
}

#[test]
fn selecting_general_omits_the_filter() {
    init_logging();
    let (state, effects) = select(AppState::new(), Sector::General);

    assert_eq!(
        effects,
        vec![Effect::FetchMarketTips {
            attempt: 1,
            sector: None,
        }]
    );
    assert!(state.view().market_tips.loading);
}

#[test]
fn selecting_a_sector_sends_its_name() {
    init_logging();
    let (_, effects) = select(AppState::new(), Sector::Technology);

    assert_eq!(
        effects,
        vec![Effect::FetchMarketTips {
            attempt: 1,
            sector: Some("Technology".to_string()),
        }]
    );
}

#[test]
fn tips_are_normalized_on_success() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::Finance);
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Ok(json!({
                "market_trends": [{"title": "A", "description": "B"}]
            })),
        },
    );

    let view = state.view();
    assert!(!view.market_tips.loading);
    assert_eq!(
        view.market_tips.tips,
        vec![MarketTip {
            title: "A".to_string(),
            description: "B".to_string(),
        }]
    );
    assert!(!view.market_tips.no_tips);
}

#[test]
fn non_list_payload_settles_as_empty_success() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::Healthcare);
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Ok(json!({ "market_trends": "not a list" })),
        },
    );

    assert!(matches!(
        state.market_tips().request(),
        RequestState::Success(tips) if tips.is_empty()
    ));
    let view = state.view();
    assert!(view.market_tips.error.is_none());
    assert!(view.market_tips.no_tips);
}

#[test]
fn last_selected_sector_wins_regardless_of_arrival_order() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::General); // attempt 1
    let (state, _) = select(state, Sector::Technology); // attempt 2
    let (state, _) = select(state, Sector::Finance); // attempt 3
    assert_eq!(state.view().market_tips.sector, Sector::Finance);

    // Finance settles first and commits.
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 3,
            result: Ok(json!({
                "market_trends": [{"title": "Finance tip", "description": "F"}]
            })),
        },
    );
    assert_eq!(state.view().market_tips.tips[0].title, "Finance tip");

    // Technology and General straggle in afterwards; both are discarded.
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 2,
            result: Ok(json!({
                "market_trends": [{"title": "Tech tip", "description": "T"}]
            })),
        },
    );
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Ok(json!({
                "market_trends": [{"title": "General tip", "description": "G"}]
            })),
        },
    );
    let view = state.view();
    assert_eq!(view.market_tips.tips.len(), 1);
    assert_eq!(view.market_tips.tips[0].title, "Finance tip");
    assert_eq!(view.market_tips.sector, Sector::Finance);
}

#[test]
fn stale_response_does_not_clear_the_loading_state() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::General); // attempt 1
    let (state, _) = select(state, Sector::Marketing); // attempt 2

    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Ok(json!({ "market_trends": [] })),
        },
    );
    // Attempt 2 is still in flight; the stale settlement must not end it.
    assert!(state.view().market_tips.loading);
}

#[test]
fn failure_keeps_the_underlying_message() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::Education);
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Err("error sending request: connection refused".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(
        view.market_tips.error.as_deref(),
        Some("error sending request: connection refused")
    );
    assert!(view.market_tips.tips.is_empty());
}

#[test]
fn reselecting_a_sector_refetches() {
    init_logging();
    let (state, _) = select(AppState::new(), Sector::Technology);
    let (state, _) = update(
        state,
        Msg::TipsSettled {
            attempt: 1,
            result: Ok(json!({ "market_trends": [] })),
        },
    );
    let (_, effects) = select(state, Sector::Technology);
    assert_eq!(
        effects,
        vec![Effect::FetchMarketTips {
            attempt: 2,
            sector: Some("Technology".to_string()),
        }]
    );
}
