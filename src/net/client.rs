//! Request client: merges options, performs the call and classifies the
//! response.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx answer becomes an `ApiError`. A 401 additionally sends the
//! page to the login document unless it is already there, so individual pages
//! never need their own unauthenticated handling. Nothing is retried.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, REQUEST_FAILED_FALLBACK};
use super::request::{Method, RequestOptions, RequestOverrides, query_string, with_query};
use super::transport::{BrowserTransport, RawResponse, Transport};
use crate::config::ClientConfig;
use crate::util::navigation::{BrowserNavigator, Navigator};

/// Successful outcome of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The body was declared JSON and parsed.
    Json(Value),
    /// Any other body, left for the caller to interpret.
    Raw(RawResponse),
}

impl ApiResponse {
    /// Deserialize a JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` for raw responses or shape mismatches.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            Self::Raw(raw) => Err(ApiError::Decode(format!(
                "expected JSON, got {}",
                raw.content_type.as_deref().unwrap_or("no content type")
            ))),
        }
    }
}

/// REST client bound to a transport and a navigator.
#[derive(Clone, Debug, Default)]
pub struct ApiClient<T = BrowserTransport, N = BrowserNavigator> {
    transport: T,
    navigator: N,
    config: ClientConfig,
}

impl ApiClient {
    /// Client for the current page using `fetch` and `window.location`.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(BrowserTransport, BrowserNavigator, config)
    }
}

impl<T: Transport, N: Navigator> ApiClient<T, N> {
    pub fn new(transport: T, navigator: N, config: ClientConfig) -> Self {
        Self { transport, navigator, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Send the login document to the navigator.
    pub fn go_to_login(&self) {
        self.navigator.assign(&self.config.login_page);
    }

    /// Issue a request against `url` (an API path, resolved against
    /// `api_base`) with `overrides` merged onto the defaults.
    ///
    /// # Errors
    ///
    /// `AuthRequired` on 401, `RequestFailed` on other non-2xx statuses,
    /// `Network` when the transport fails, `Decode` when a JSON body is
    /// malformed.
    pub async fn request(&self, url: &str, overrides: RequestOverrides) -> Result<ApiResponse, ApiError> {
        let options = RequestOptions::merged(overrides);
        let url = self.config.url(url);
        log::debug!("{} {url}", options.method.as_str());
        let resp = self.transport.send(&url, &options).await?;
        self.classify(resp)
    }

    /// `GET url?params`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; `InvalidRequest` if `params` cannot be
    /// encoded as a query string.
    pub async fn get<P: Serialize + ?Sized>(&self, url: &str, params: &P) -> Result<ApiResponse, ApiError> {
        let query = query_string(params)?;
        self.request(&with_query(url, &query), RequestOverrides::default()).await
    }

    /// `POST url` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; `InvalidRequest` if `body` cannot be
    /// serialized.
    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.request(url, RequestOverrides::json(Method::Post, body)?).await
    }

    /// `PUT url` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.request(url, RequestOverrides::json(Method::Put, body)?).await
    }

    /// `DELETE url`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.request(url, RequestOverrides::method(Method::Delete)).await
    }

    fn classify(&self, resp: RawResponse) -> Result<ApiResponse, ApiError> {
        if resp.status == 401 {
            let pathname = self.navigator.pathname();
            if !self.config.is_login_page(&pathname) {
                log::info!("unauthorized on {pathname}; redirecting to {}", self.config.login_page);
                self.go_to_login();
            }
            return Err(ApiError::AuthRequired);
        }
        if !resp.is_success() {
            let message = failure_message(&resp.body);
            log::warn!("request failed: status={} message={message}", resp.status);
            return Err(ApiError::RequestFailed(message));
        }
        if resp.is_json() {
            let value = serde_json::from_slice(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
            return Ok(ApiResponse::Json(value));
        }
        Ok(ApiResponse::Raw(resp))
    }
}

/// Message for a failed response body: its `detail`, or the fallback.
///
/// FastAPI validation failures carry `detail` as a list of `{ "msg": .. }`
/// entries; their messages are joined.
pub fn failure_message(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|mut value| value.get_mut("detail").map(Value::take));
    let message = match detail {
        Some(Value::String(text)) => text,
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    };
    if message.is_empty() { REQUEST_FAILED_FALLBACK.to_owned() } else { message }
}
