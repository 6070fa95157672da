use std::sync::Arc;
use std::time::{Duration, Instant};

use compass_client::{ApiError, ApiErrorKind, RemoteService, ServiceHandle};
use compass_core::{Effect, Msg, RecommendationQuery};
use serde_json::{json, Value};

/// Scripted service: every operation resolves to the configured outcome.
struct StubService {
    trends: Result<Value, ApiError>,
    chat: Result<Value, ApiError>,
}

#[async_trait::async_trait]
impl RemoteService for StubService {
    async fn market_trends(&self, _sector: Option<&str>) -> Result<Value, ApiError> {
        self.trends.clone()
    }

    async fn recommendations(&self, _query: &RecommendationQuery) -> Result<Value, ApiError> {
        Ok(json!({ "recommendations": [] }))
    }

    async fn chat(&self, _message: &str) -> Result<Value, ApiError> {
        self.chat.clone()
    }
}

fn wait_for_msg(handle: &ServiceHandle) -> Msg {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(msg) = handle.try_recv() {
            return msg;
        }
        assert!(Instant::now() < deadline, "no settled message arrived");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn settled_message_echoes_the_effect_attempt() {
    let handle = ServiceHandle::with_service(Arc::new(StubService {
        trends: Ok(json!({ "market_trends": [{"title": "T", "description": "D"}] })),
        chat: Ok(json!({ "response": "hi" })),
    }));

    handle.run(vec![Effect::FetchMarketTips {
        attempt: 7,
        sector: None,
    }]);

    match wait_for_msg(&handle) {
        Msg::TipsSettled { attempt, result } => {
            assert_eq!(attempt, 7);
            let body = result.expect("stub succeeds");
            assert_eq!(body["market_trends"][0]["title"], json!("T"));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn failed_call_carries_the_error_text() {
    let handle = ServiceHandle::with_service(Arc::new(StubService {
        trends: Ok(json!({ "market_trends": [] })),
        chat: Err(ApiError {
            kind: ApiErrorKind::Status(503),
            message: "API error: status 503 Service Unavailable".to_string(),
        }),
    }));

    handle.run(vec![Effect::SendChatMessage {
        attempt: 1,
        message: "hello".to_string(),
    }]);

    match wait_for_msg(&handle) {
        Msg::ChatSettled { attempt, result } => {
            assert_eq!(attempt, 1);
            assert_eq!(
                result,
                Err("API error: status 503 Service Unavailable".to_string())
            );
        }
        other => panic!("unexpected message: {other:?}"),
    }
}
