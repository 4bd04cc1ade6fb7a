//! # TMDB API Rust Client
//!
//! An async client for version 3 of The Movie Database (TMDB) REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TmdbConfig`] and [`TmdbConfigBuilder`]
//! - Validated newtypes for credentials and session identifiers
//! - An async HTTP client that authenticates with an API key or a read
//!   access token
//! - One resource type per TMDB resource group ([`rest::resources`]), each
//!   remembering the attributes of its most recent response
//! - Typed models for the most common payloads ([`rest::resources::common`])
//!
//! ## Quick Start
//!
//! ```rust
//! use tmdb_api::{ApiKey, TmdbConfig};
//!
//! let config = TmdbConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use tmdb_api::{RestClient, TmdbConfig};
//! use tmdb_api::rest::TmdbResource;
//! use tmdb_api::rest::resources::{Discover, DiscoverMovieParams, Movies};
//!
//! let client = RestClient::new(&TmdbConfig::from_env()?)?;
//!
//! let mut movie = Movies::new(550);
//! let body = movie.details(&client, None).await?;
//! println!("{} ({})", body["title"], body["release_date"]);
//!
//! let params = DiscoverMovieParams {
//!     vote_average_gte: Some(7.0),
//!     ..Default::default()
//! };
//! let mut discover = Discover::new();
//! discover.movie(&client, Some(params)).await?;
//! ```
//!
//! ## User Sessions
//!
//! ```rust,ignore
//! use tmdb_api::SessionId;
//! use tmdb_api::rest::resources::{Account, Authentication};
//!
//! let mut auth = Authentication::new();
//! let token = auth.token_new(&client).await?;
//! // ... the user approves the token on themoviedb.org ...
//!
//! let session = auth.session_new(&client, Some(params)).await?;
//! let session_id = SessionId::new(session["session_id"].as_str().unwrap_or_default())?;
//!
//! let mut account = Account::new(session_id);
//! account.info(&client).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client is `Send + Sync` and can be shared
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No retries**: Every failure is returned to the caller as-is

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiKey, BaseUrl, GuestSessionId, SessionId, TmdbConfig, TmdbConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource infrastructure
pub use rest::{Attributes, ResourceError, TmdbResource};
