//! Resource-level error types.
//!
//! [`ResourceError`] is what every resource operation returns. It wraps the
//! lower layers ([`RestError`] and through it [`HttpError`]) and adds the
//! failures that only exist at the resource level: unknown endpoint names,
//! identifiers that are not available yet, parameters that cannot be
//! serialized, and typed decoding of a returned payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::rest::ResourceError;
//!
//! match movie.details(&client, None).await {
//!     Ok(body) => println!("{}", body["title"]),
//!     Err(e) if e.status() == Some(404) => println!("no such movie"),
//!     Err(ResourceError::MissingId { resource, placeholder }) => {
//!         println!("{resource} needs {placeholder} first");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for TMDB resource operations.
///
/// # Example
///
/// ```rust
/// use tmdb_api::rest::ResourceError;
///
/// let error = ResourceError::MissingId {
///     resource: "Account",
///     placeholder: "id".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Account has no value for path placeholder {id}"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource has no endpoint with this name.
    #[error("{resource} has no endpoint named '{endpoint}'")]
    UnknownEndpoint {
        /// The type name of the resource.
        resource: &'static str,
        /// The endpoint that was requested.
        endpoint: String,
    },

    /// A path placeholder has no value on the resource.
    #[error("{resource} has no value for path placeholder {{{placeholder}}}")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The placeholder name without braces.
        placeholder: String,
    },

    /// The operation needs a user session and the resource has none.
    #[error("{resource} operation requires a session id")]
    MissingSession {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// Request parameters could not be converted to JSON.
    #[error("Failed to serialize request parameters: {0}")]
    InvalidParams(#[source] serde_json::Error),

    /// A returned payload did not match the requested typed model.
    #[error("Failed to decode response as {target}: {source}")]
    Decode {
        /// The Rust type that was requested.
        target: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) | Self::Rest(RestError::Http(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code for remote errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.http()? {
            HttpError::Response(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns TMDB's own status code for remote errors, when the body had one.
    #[must_use]
    pub fn tmdb_status_code(&self) -> Option<i64> {
        match self.http()? {
            HttpError::Response(e) => e.status_code,
            _ => None,
        }
    }

    /// Returns `true` if the API answered with a non-success status.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.http(), Some(HttpError::Response(_)))
    }

    /// Returns `true` if a payload could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. }) || matches!(self.http(), Some(HttpError::Decode { .. }))
    }

    /// Returns `true` for transport failures (connection, TLS, timeout).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self.http(), Some(HttpError::Network(_)))
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
