//! Search resource implementation.
//!
//! Each search takes the query text plus optional filters. The query text is
//! always sent; filters left as `None` are not.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::{Search, SearchMovieParams};
//!
//! let mut search = Search::new();
//! let params = SearchMovieParams {
//!     year: Some(1999),
//!     ..Default::default()
//! };
//! search.movie(&client, "Fight Club", Some(params)).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    optional_query, Attributes, PageParams, Query, ResourceError, ResourcePath, TmdbResource,
};

/// Parameters for [`Search::company`] and [`Search::keyword`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchPageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Parameters for [`Search::movie`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchMovieParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_release_year: Option<i32>,
}

/// Parameters for [`Search::multi`] and [`Search::person`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchMultiParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Parameters for [`Search::tv`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchTvParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date_year: Option<i32>,
}

/// The `search` endpoints.
#[derive(Debug, Clone, Default)]
pub struct Search {
    attributes: Attributes,
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn search<T: Serialize>(
        &mut self,
        client: &RestClient,
        endpoint: &str,
        text: &str,
        params: Option<&T>,
    ) -> Result<Value, ResourceError> {
        let mut query: Query = optional_query(params)?;
        query.insert("query".to_string(), text.to_string());
        self.call(client, endpoint, query, None).await
    }

    /// Searches companies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn company(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchPageParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "company", query, params.as_ref()).await
    }

    /// Searches collections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn collection(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "collection", query, params.as_ref())
            .await
    }

    /// Searches keywords.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn keyword(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchPageParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "keyword", query, params.as_ref()).await
    }

    /// Searches movies by original, translated and alternative titles.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn movie(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchMovieParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "movie", query, params.as_ref()).await
    }

    /// Searches movies, TV shows and people in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn multi(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchMultiParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "multi", query, params.as_ref()).await
    }

    /// Searches people.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn person(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchMultiParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "person", query, params.as_ref()).await
    }

    /// Searches TV shows.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn tv(
        &mut self,
        client: &RestClient,
        query: &str,
        params: Option<SearchTvParams>,
    ) -> Result<Value, ResourceError> {
        self.search(client, "tv", query, params.as_ref()).await
    }
}

impl TmdbResource for Search {
    const NAME: &'static str = "Search";
    const BASE_PATH: &'static str = "search";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "company", "/company"),
        ResourcePath::new(HttpMethod::Get, "collection", "/collection"),
        ResourcePath::new(HttpMethod::Get, "keyword", "/keyword"),
        ResourcePath::new(HttpMethod::Get, "movie", "/movie"),
        ResourcePath::new(HttpMethod::Get, "multi", "/multi"),
        ResourcePath::new(HttpMethod::Get, "person", "/person"),
        ResourcePath::new(HttpMethod::Get, "tv", "/tv"),
    ];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::new()
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
