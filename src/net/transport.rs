//! HTTP transport seam between the request client and the browser fetch API.
//!
//! Client-side (browser): real HTTP calls via `gloo-net`.
//! Native builds: `BrowserTransport` answers every call with a network error,
//! since there is no fetch to call; tests supply their own `Transport`.

use async_trait::async_trait;

use super::error::ApiError;
use super::request::RequestOptions;

/// A completed HTTP exchange with its body already read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| ct.contains("application/json"))
    }

    /// Body as UTF-8 text, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs one HTTP round-trip.
///
/// Futures are `!Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `options` to `url` and return the response.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response was produced. Non-2xx
    /// statuses are not errors at this layer.
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "browser")]
        {
            use gloo_net::http::{Method as HttpMethod, RequestBuilder};
            use web_sys::RequestCredentials;

            use super::request::{Credentials, Method};

            let method = match options.method {
                Method::Get => HttpMethod::GET,
                Method::Post => HttpMethod::POST,
                Method::Put => HttpMethod::PUT,
                Method::Delete => HttpMethod::DELETE,
            };
            let credentials = match options.credentials {
                Credentials::Omit => RequestCredentials::Omit,
                Credentials::SameOrigin => RequestCredentials::SameOrigin,
                Credentials::Include => RequestCredentials::Include,
            };
            let mut builder = RequestBuilder::new(url).method(method).credentials(credentials);
            for (name, value) in &options.headers {
                builder = builder.header(name, value);
            }
            let request = match &options.body {
                Some(body) => builder.body(body.as_str()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            let body = resp.binary().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, content_type, body })
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (url, options);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
