//! HTTP layer for the Activities API.
//!
//! The board talks to the API through the [`ActivitiesApi`] trait so flow
//! tests can substitute a recording mock; [`HttpActivitiesApi`] is the real
//! fetch-backed client.

pub mod api_client;

pub use api_client::HttpActivitiesApi;

use serde::Deserialize;
use std::fmt;

use crate::models::Activity;

/// What went wrong talking to the API.
///
/// `Api` is a response the server actually sent (non-2xx, optionally carrying
/// a `detail` string); `Transport` is everything that prevented us from
/// getting one (network failure, unreadable body).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Api { status: u16, detail: Option<String> },
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Api { status, detail } => match detail {
                Some(detail) => write!(f, "API error {}: {}", status, detail),
                None => write!(f, "API error {}", status),
            },
            ApiError::Transport(reason) => write!(f, "transport error: {}", reason),
        }
    }
}

/// Success body of the signup/unregister endpoints.
#[derive(Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

/// Error body of the signup/unregister endpoints (FastAPI-style).
#[derive(Deserialize)]
pub(crate) struct DetailBody {
    pub detail: Option<String>,
}

/// The consumed contract of the Activities API.
// Single-threaded wasm: the returned futures are !Send.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// `GET /activities` – the full activity map in server order.
    async fn list_activities(&self) -> Result<Vec<(String, Activity)>, ApiError>;

    /// `POST /activities/{name}/signup?email=...` – Ok carries the server's
    /// confirmation message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{name}/participants?email=...`
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail_when_present() {
        let err = ApiError::Api {
            status: 400,
            detail: Some("Already signed up".to_string()),
        };
        assert_eq!(err.to_string(), "API error 400: Already signed up");
    }

    #[test]
    fn display_without_detail() {
        let err = ApiError::Api { status: 404, detail: None };
        assert_eq!(err.to_string(), "API error 404");
    }

    #[test]
    fn detail_body_tolerates_missing_field() {
        let parsed: DetailBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.detail.is_none());
    }
}
