use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use compass_core::RecommendationQuery;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A failed call. The message preserves the underlying error text or the
/// server-provided detail verbatim; it is what the user ends up seeing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network unreachable, DNS failure, connection reset.
    Transport,
    /// The request outlived the configured timeout.
    Timeout,
    /// Non-success response status.
    Status(u16),
    /// The body arrived but was not parseable JSON.
    Decode,
}

/// The remote career service, reduced to its three logical operations.
/// Implementations return the raw JSON body; shape tolerance is the
/// normalizer's concern, not the transport's.
#[async_trait::async_trait]
pub trait RemoteService: Send + Sync {
    async fn market_trends(&self, sector: Option<&str>) -> Result<Value, ApiError>;
    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Value, ApiError>;
    async fn chat(&self, message: &str) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpRemoteService {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl HttpRemoteService {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Transport, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl RemoteService for HttpRemoteService {
    async fn market_trends(&self, sector: Option<&str>) -> Result<Value, ApiError> {
        let mut request = self.client.get(self.endpoint("market-trends"));
        // The unfiltered view omits the parameter entirely so the server
        // takes the same path as an initial unfiltered load.
        if let Some(sector) = sector {
            request = request.query(&[("sector", sector)]);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;
        read_json_body(response).await
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Value, ApiError> {
        let body = json!({
            "preferences": query.preferences,
            "skills": query.skills,
            "detailed_expectations": query.detailed_expectations,
        });
        let response = self
            .client
            .post(self.endpoint("recommendations"))
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json_body(response).await
    }

    async fn chat(&self, message: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.endpoint("chat"))
            .json(&json!({ "message": message }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json_body(response).await
    }
}

async fn read_json_body(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        // Prefer the server's own explanation when the error body carries
        // one, like a validation detail.
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| value.get("detail").and_then(Value::as_str).map(ToOwned::to_owned));
        let message = detail.unwrap_or_else(|| format!("API error: status {status}"));
        return Err(ApiError::new(ApiErrorKind::Status(status.as_u16()), message));
    }

    let body = response.text().await.map_err(map_reqwest_error)?;
    serde_json::from_str(&body)
        .map_err(|err| ApiError::new(ApiErrorKind::Decode, format!("malformed response body: {err}")))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ApiErrorKind::Transport, err.to_string())
}
