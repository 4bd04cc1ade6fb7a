//! Genre resource implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    optional_query, Attributes, LanguageParams, ResourceError, ResourcePath, TmdbResource,
};

/// Parameters for [`Genres::movies`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GenreMoviesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_movies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
}

/// The `genre` endpoints.
///
/// The genre id is only needed for [`movies`](Self::movies).
#[derive(Debug, Clone, Default)]
pub struct Genres {
    pub id: Option<u32>,
    attributes: Attributes,
}

impl Genres {
    /// Creates a handle for the genre lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle for a single genre.
    #[must_use]
    pub fn with_id(id: u32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Gets the list of official movie genres.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn movie_list(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "movie_list", query, None).await
    }

    /// Gets the list of official TV genres.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn tv_list(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "tv_list", query, None).await
    }

    /// Gets the movies of a genre.
    ///
    /// This legacy endpoint is superseded by discover with `with_genres`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a genre id, or any error
    /// from the request.
    pub async fn movies(
        &mut self,
        client: &RestClient,
        params: Option<GenreMoviesParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "movies", query, None).await
    }
}

impl TmdbResource for Genres {
    const NAME: &'static str = "Genres";
    const BASE_PATH: &'static str = "genre";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "movie_list", "/movie/list"),
        ResourcePath::new(HttpMethod::Get, "tv_list", "/tv/list"),
        ResourcePath::new(HttpMethod::Get, "movies", "/{id}/movies"),
    ];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        self.id
            .map(|id| HashMap::from([("id", id.to_string())]))
            .unwrap_or_default()
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;

    #[test]
    fn test_genre_lists_need_no_id() {
        let genres = Genres::new();
        assert_eq!(genres.resolve("movie_list").unwrap().1, "genre/movie/list");
        assert_eq!(genres.resolve("tv_list").unwrap().1, "genre/tv/list");
        assert!(genres.resolve("movies").is_err());
    }

    #[test]
    fn test_genre_movies_path() {
        let genres = Genres::with_id(18);
        assert_eq!(genres.resolve("movies").unwrap().1, "genre/18/movies");
    }

    #[test]
    fn test_genre_movies_params() {
        let query = serialize_to_query(&GenreMoviesParams {
            include_all_movies: Some(true),
            page: Some(3),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("include_all_movies").map(String::as_str), Some("true"));
        assert_eq!(query.get("page").map(String::as_str), Some("3"));
    }
}
