//! Discover resource implementation.
//!
//! Discover filters movies and TV shows by a long list of criteria. Range
//! filters are plain fields (`vote_average_gte`) sent under their dotted
//! wire names (`vote_average.gte`). Filters without a field of their own can
//! be passed through with `with_extra`.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use tmdb_api::rest::resources::{Discover, DiscoverMovieParams};
//!
//! let params = DiscoverMovieParams {
//!     vote_average_gte: Some(7.0),
//!     primary_release_date_lte: NaiveDate::from_ymd_opt(2020, 1, 1),
//!     ..Default::default()
//! };
//!
//! let mut discover = Discover::new();
//! let page = discover.movie(&client, Some(params)).await?;
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    merge_extra, serialize_to_query, Attributes, Query, ResourceError, ResourcePath,
    TmdbResource,
};

/// Filters for [`Discover::movie`].
///
/// List-valued filters (`with_genres`, `with_cast`, ...) take the API's own
/// syntax: `,` for AND and `|` for OR.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscoverMovieParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(rename = "certification.lte", skip_serializing_if = "Option::is_none")]
    pub certification_lte: Option<String>,
    #[serde(rename = "certification.gte", skip_serializing_if = "Option::is_none")]
    pub certification_gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_release_year: Option<i32>,
    #[serde(
        rename = "primary_release_date.gte",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_release_date_gte: Option<NaiveDate>,
    #[serde(
        rename = "primary_release_date.lte",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_release_date_lte: Option<NaiveDate>,
    #[serde(rename = "release_date.gte", skip_serializing_if = "Option::is_none")]
    pub release_date_gte: Option<NaiveDate>,
    #[serde(rename = "release_date.lte", skip_serializing_if = "Option::is_none")]
    pub release_date_lte: Option<NaiveDate>,
    /// Release types, e.g. `2|3` for limited or theatrical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_release_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "vote_count.gte", skip_serializing_if = "Option::is_none")]
    pub vote_count_gte: Option<u32>,
    #[serde(rename = "vote_count.lte", skip_serializing_if = "Option::is_none")]
    pub vote_count_lte: Option<u32>,
    #[serde(rename = "vote_average.gte", skip_serializing_if = "Option::is_none")]
    pub vote_average_gte: Option<f64>,
    #[serde(rename = "vote_average.lte", skip_serializing_if = "Option::is_none")]
    pub vote_average_lte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_crew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_people: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_companies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_keywords: Option<String>,
    #[serde(rename = "with_runtime.gte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_gte: Option<u32>,
    #[serde(rename = "with_runtime.lte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_lte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_original_language: Option<String>,

    /// Additional filters sent as given.
    #[serde(skip)]
    pub extra: BTreeMap<String, String>,
}

impl DiscoverMovieParams {
    /// Adds a filter that has no dedicated field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Filters for [`Discover::tv`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscoverTvParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "air_date.gte", skip_serializing_if = "Option::is_none")]
    pub air_date_gte: Option<NaiveDate>,
    #[serde(rename = "air_date.lte", skip_serializing_if = "Option::is_none")]
    pub air_date_lte: Option<NaiveDate>,
    #[serde(
        rename = "first_air_date.gte",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_air_date_gte: Option<NaiveDate>,
    #[serde(
        rename = "first_air_date.lte",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_air_date_lte: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "vote_average.gte", skip_serializing_if = "Option::is_none")]
    pub vote_average_gte: Option<f64>,
    #[serde(rename = "vote_count.gte", skip_serializing_if = "Option::is_none")]
    pub vote_count_gte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_networks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_genres: Option<String>,
    #[serde(rename = "with_runtime.gte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_gte: Option<u32>,
    #[serde(rename = "with_runtime.lte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_lte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_null_first_air_dates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_original_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screened_theatrically: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_companies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_keywords: Option<String>,

    /// Additional filters sent as given.
    #[serde(skip)]
    pub extra: BTreeMap<String, String>,
}

impl DiscoverTvParams {
    /// Adds a filter that has no dedicated field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// The `discover` endpoints.
#[derive(Debug, Clone, Default)]
pub struct Discover {
    attributes: Attributes,
}

impl Discover {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers movies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn movie(
        &mut self,
        client: &RestClient,
        params: Option<DiscoverMovieParams>,
    ) -> Result<Value, ResourceError> {
        let query = match params {
            Some(params) => with_extra_query(&params, &params.extra)?,
            None => Query::new(),
        };
        self.call(client, "movie", query, None).await
    }

    /// Discovers TV shows.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn tv(
        &mut self,
        client: &RestClient,
        params: Option<DiscoverTvParams>,
    ) -> Result<Value, ResourceError> {
        let query = match params {
            Some(params) => with_extra_query(&params, &params.extra)?,
            None => Query::new(),
        };
        self.call(client, "tv", query, None).await
    }
}

fn with_extra_query<T: Serialize>(
    params: &T,
    extra: &BTreeMap<String, String>,
) -> Result<Query, ResourceError> {
    let mut query = serialize_to_query(params)?;
    merge_extra(&mut query, extra);
    Ok(query)
}

impl TmdbResource for Discover {
    const NAME: &'static str = "Discover";
    const BASE_PATH: &'static str = "discover";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "movie", "/movie"),
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
