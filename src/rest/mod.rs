//! REST resource infrastructure for the TMDB v3 API.
//!
//! - **[`TmdbResource`] trait**: endpoint table, identifier substitution and
//!   the shared dispatch-and-mirror routine
//! - **[`Attributes`]**: the bag of response fields mirrored onto a resource
//! - **Path building**: [`ResourcePath`], [`get_path`], [`build_path`]
//! - **Parameter assembly**: [`serialize_to_query`] and shared params structs
//! - **[`ResourceError`]**: error type for resource operations
//!
//! Individual resources (Movies, Account, Discover, ...) live in
//! [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::{RestClient, TmdbConfig};
//! use tmdb_api::rest::TmdbResource;
//! use tmdb_api::rest::resources::Movies;
//!
//! let client = RestClient::new(&TmdbConfig::from_env()?)?;
//!
//! let mut movie = Movies::new(550);
//! let body = movie.details(&client, None).await?;
//! println!("{}", body["title"]);
//!
//! // Every top-level key is also available on the resource
//! assert_eq!(movie.attr("id"), Some(&serde_json::json!(550)));
//! ```

mod attributes;
mod errors;
mod params;
mod path;
mod resource;

pub mod resources;

pub use attributes::Attributes;
pub use errors::ResourceError;
pub use params::{
    merge_extra, optional_query, range_key, serialize_to_query, CreatedAtSort, LanguageParams,
    PageParams, Query,
};
pub use path::{build_path, get_path, MissingPathId, ResourcePath};
pub use resource::TmdbResource;
