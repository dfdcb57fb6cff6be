//! Request options and their merge onto the client defaults.
//!
//! DESIGN
//! ======
//! Every call starts from the same defaults (`Content-Type: application/json`,
//! credentials included so the session cookie travels). Callers only describe
//! what differs through `RequestOverrides`; `RequestOptions::merged` is the
//! single place the two meet.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;

use super::error::ApiError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Mirrors the fetch `credentials` modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    #[default]
    Include,
}

/// Fully resolved options handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Credentials,
}

/// Caller-supplied differences from the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
}

impl RequestOverrides {
    pub fn method(method: Method) -> Self {
        Self { method: Some(method), ..Self::default() }
    }

    /// Overrides for a request carrying `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        Ok(Self { method: Some(method), body: Some(text), ..Self::default() })
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())],
            body: None,
            credentials: Credentials::Include,
        }
    }
}

impl RequestOptions {
    /// Apply `overrides` onto the defaults.
    ///
    /// Headers merge by name (case-insensitive), so a caller can replace
    /// `Content-Type` without dropping the other defaults.
    pub fn merged(overrides: RequestOverrides) -> Self {
        let mut options = Self::default();
        if let Some(method) = overrides.method {
            options.method = method;
        }
        for (name, value) in overrides.headers {
            match options.headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
                Some(slot) => slot.1 = value,
                None => options.headers.push((name, value)),
            }
        }
        if overrides.body.is_some() {
            options.body = overrides.body;
        }
        options.credentials = overrides.credentials.unwrap_or_default();
        options
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serialize `params` as a query string.
///
/// # Errors
///
/// Returns `ApiError::InvalidRequest` if `params` is not a flat map/struct.
pub fn query_string<P: Serialize + ?Sized>(params: &P) -> Result<String, ApiError> {
    serde_urlencoded::to_string(params).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Append `query` to `url`, adding `?` only when there is something to add.
pub fn with_query(url: &str, query: &str) -> String {
    if query.is_empty() { url.to_owned() } else { format!("{url}?{query}") }
}
