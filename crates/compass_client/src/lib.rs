//! Compass client: effect execution against the remote career service.
mod api;
mod bridge;

pub use api::{ApiError, ApiErrorKind, ApiSettings, HttpRemoteService, RemoteService};
pub use bridge::ServiceHandle;
