//! HTTP-specific error types for the TMDB API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.status_message);
//!     }
//!     Err(HttpError::Decode { code, source }) => {
//!         println!("Undecodable {code} response: {source}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// TMDB error payloads look like
/// `{"success": false, "status_code": 34, "status_message": "..."}`. When the
/// body has that shape, `status_code` and `status_message` are filled in;
/// `body` always carries the raw response text.
///
/// # Example
///
/// ```rust
/// use tmdb_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     status_code: Some(34),
///     status_message: Some("The resource you requested could not be found.".to_string()),
///     body: String::new(),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "TMDB API error 404: The resource you requested could not be found."
/// );
/// ```
#[derive(Debug, Error)]
#[error("TMDB API error {code}: {}", self.message())]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// TMDB's own numeric status code, when present in the body.
    pub status_code: Option<i64>,
    /// TMDB's human-readable status message, when present in the body.
    pub status_message: Option<String>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponseError {
    /// Builds an error from a status and raw body, extracting TMDB's
    /// `status_code` / `status_message` fields when the body is JSON.
    #[must_use]
    pub fn from_body(code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let parsed: Option<serde_json::Value> = serde_json::from_str(&body).ok();
        let status_code = parsed
            .as_ref()
            .and_then(|v| v.get("status_code"))
            .and_then(serde_json::Value::as_i64);
        let status_message = parsed
            .as_ref()
            .and_then(|v| v.get("status_message"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);

        Self {
            code,
            status_code,
            status_message,
            body,
        }
    }

    fn message(&self) -> &str {
        match &self.status_message {
            Some(message) => message,
            None if self.body.is_empty() => "<empty body>",
            None => &self.body,
        }
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use tmdb_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body is not valid JSON.
    #[error("Failed to decode {code} response body: {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
