//! REST API client for the TMDB v3 API.
//!
//! A thin layer over [`HttpClient`](crate::clients::HttpClient):
//!
//! - [`RestClient`]: `get()`, `post()`, `delete()` and `delete_with_body()`
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped, so `/movie/550/` and
//! `movie/550` address the same endpoint. An empty path is rejected.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
