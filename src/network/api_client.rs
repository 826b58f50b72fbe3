//! Fetch-backed Activities API client.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{ActivitiesApi, ApiError, DetailBody, MessageBody};
use crate::constants::DEFAULT_API_BASE_URL;
use crate::models::Activity;

/// REST client for the Activities API. The base URL is usually empty
/// (same-origin relative paths).
#[derive(Clone)]
pub struct HttpActivitiesApi {
    base_url: String,
}

impl Default for HttpActivitiesApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl HttpActivitiesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<Vec<(String, Activity)>, ApiError> {
        let (status, body) = request(&activities_url(&self.base_url), "GET").await?;
        if !is_success(status) {
            return Err(ApiError::Api { status, detail: parse_detail(&body) });
        }
        // The server sends an object keyed by activity name; serde_json's
        // preserve_order feature keeps the wire order.
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Transport(format!("unparseable activities body: {}", e)))?;
        map.into_iter()
            .map(|(name, value)| {
                serde_json::from_value::<Activity>(value)
                    .map(|activity| (name, activity))
                    .map_err(|e| ApiError::Transport(format!("bad activity entry: {}", e)))
            })
            .collect()
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        mutate(&signup_url(&self.base_url, activity, email), "POST").await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        mutate(&unregister_url(&self.base_url, activity, email), "DELETE").await
    }
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

pub(crate) fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub(crate) fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        encode(activity),
        encode(email)
    )
}

pub(crate) fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        base,
        encode(activity),
        encode(email)
    )
}

// ---------------------------------------------------------------------------
// Fetch plumbing
// ---------------------------------------------------------------------------

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<DetailBody>(body).ok().and_then(|b| b.detail)
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

/// Issue a bodyless request and hand back the status plus the raw body text,
/// so callers can read `detail` out of non-2xx responses too.
async fn request(url: &str, method: &str) -> Result<(u16, String), ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no global window".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("fetch did not yield a Response".to_string()))?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_err)?).await.map_err(js_err)?;
    Ok((status, text.as_string().unwrap_or_default()))
}

/// Shared handling for the two mutating endpoints: 2xx bodies carry
/// `{"message": ...}`, everything else may carry `{"detail": ...}`.
async fn mutate(url: &str, method: &str) -> Result<String, ApiError> {
    let (status, body) = request(url, method).await?;
    if is_success(status) {
        let parsed: MessageBody = serde_json::from_str(&body)
            .map_err(|e| ApiError::Transport(format!("unparseable success body: {}", e)))?;
        Ok(parsed.message)
    } else {
        Err(ApiError::Api { status, detail: parse_detail(&body) })
    }
}
