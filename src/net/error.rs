//! Failure taxonomy surfaced by the request client.

/// Fallback message when a failed response carries no usable `detail`.
pub const REQUEST_FAILED_FALLBACK: &str = "request failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered 401. A login redirect has already been attempted.
    #[error("authentication required")]
    AuthRequired,
    /// Any other non-2xx answer, carrying the server's `detail` or the fallback.
    #[error("{0}")]
    RequestFailed(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be read as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The query string or JSON body could not be serialized.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
