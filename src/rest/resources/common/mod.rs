//! Typed models for common TMDB payloads.
//!
//! Resource methods return untyped `serde_json::Value`. These structs give
//! callers a typed view of the payloads they use most, via [`decode`]:
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::{Search, common::{decode, Page, MovieSummary}};
//!
//! let mut search = Search::new();
//! let body = search.movie(&client, "Fight Club", None).await?;
//! let page: Page<MovieSummary> = decode(&body)?;
//! for movie in &page.results {
//!     println!("{} ({})", movie.title.as_deref().unwrap_or("?"), movie.id);
//! }
//! ```

mod auth;
mod media;

pub use auth::{
    AccountDetails, ListCreated, NewGuestSession, NewSession, RequestToken, StatusResponse,
};
pub use media::{Genre, GenreList, MovieSummary, Page, TvSummary};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::rest::ResourceError;

/// Decodes a returned payload into a typed model.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ResourceError> {
    T::deserialize(value).map_err(|source| ResourceError::Decode {
        target: std::any::type_name::<T>(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_genre_list() {
        let body = json!({"genres": [{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]});

        let list: GenreList = decode(&body).unwrap();
        assert_eq!(list.genres.len(), 2);
        assert_eq!(list.genres[0].name, "Action");
    }

    #[test]
    fn test_decode_reports_target_type() {
        let err = decode::<GenreList>(&json!([1, 2])).unwrap_err();

        match err {
            ResourceError::Decode { target, .. } => assert!(target.ends_with("GenreList")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
