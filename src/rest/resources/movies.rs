//! Movie resource implementation.
//!
//! Per-movie endpoints need the movie id. The catalogue listings
//! ([`latest`](Movies::latest), [`popular`](Movies::popular), ...) do not, so
//! they can be called on `Movies::default()`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::{Movies, MovieDetailsParams};
//! use tmdb_api::rest::TmdbResource;
//!
//! let mut movie = Movies::new(550);
//! let params = MovieDetailsParams {
//!     append_to_response: Some("credits,videos".to_string()),
//!     ..Default::default()
//! };
//! movie.details(&client, Some(params)).await?;
//! println!("{}", movie.attr("title").unwrap());
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpMethod, RestClient};
use crate::config::{GuestSessionId, SessionId};
use crate::rest::{
    optional_query, serialize_to_query, Attributes, LanguageParams, PageParams, Query,
    ResourceError, ResourcePath, TmdbResource,
};

/// Parameters for [`Movies::details`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MovieDetailsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comma-separated sub-requests to embed, e.g. `credits,images`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_to_response: Option<String>,
}

/// Parameters for [`Movies::alternative_titles`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AlternativeTitlesParams {
    /// ISO 3166-1 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Parameters for [`Movies::changes`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MovieChangesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Parameters for [`Movies::images`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MovieImagesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Extra image languages, e.g. `en,null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_image_language: Option<String>,
}

/// Parameters for the now playing, popular, top rated and upcoming listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MovieListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// ISO 3166-1 region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// The session a rating is made under. Give one of the two.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RatingSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_session_id: Option<GuestSessionId>,
}

#[derive(Serialize)]
struct AccountStatesParams<'a> {
    session_id: &'a SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_session_id: Option<&'a GuestSessionId>,
}

/// A movie, or the movie catalogue when no id is set.
#[derive(Debug, Clone, Default)]
pub struct Movies {
    pub id: Option<u64>,
    attributes: Attributes,
}

impl Movies {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id: Some(id),
            attributes: Attributes::default(),
        }
    }

    /// Gets the primary information about the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn details(
        &mut self,
        client: &RestClient,
        params: Option<MovieDetailsParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "details", query, None).await
    }

    /// Gets the rating, watchlist and favourite status of the movie for a
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn account_states(
        &mut self,
        client: &RestClient,
        session_id: &SessionId,
        guest_session_id: Option<&GuestSessionId>,
    ) -> Result<Value, ResourceError> {
        let query = serialize_to_query(&AccountStatesParams {
            session_id,
            guest_session_id,
        })?;
        self.call(client, "account_states", query, None).await
    }

    /// Gets the alternative titles of the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn alternative_titles(
        &mut self,
        client: &RestClient,
        params: Option<AlternativeTitlesParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "alternative_titles", query, None).await
    }

    /// Gets the changes made to the movie, 24 hours at a time by default.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn changes(
        &mut self,
        client: &RestClient,
        params: Option<MovieChangesParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "changes", query, None).await
    }

    /// Gets the cast and crew.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn credits(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "credits", Query::new(), None).await
    }

    /// Gets the external ids (IMDb, Facebook, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn external_ids(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "external_ids", Query::new(), None).await
    }

    /// Gets the images of the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn images(
        &mut self,
        client: &RestClient,
        params: Option<MovieImagesParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "images", query, None).await
    }

    /// Gets the keywords of the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn keywords(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "keywords", Query::new(), None).await
    }

    /// Gets the user lists the movie belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn lists(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "lists", query, None).await
    }

    /// Gets recommended movies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn recommendations(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "recommendations", query, None).await
    }

    /// Gets the release dates and certifications per country.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn release_dates(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "release_dates", Query::new(), None).await
    }

    /// Gets the user reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn reviews(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "reviews", query, None).await
    }

    /// Gets similar movies, matched on keywords and genres.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn similar_movies(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "similar_movies", query, None).await
    }

    /// Gets the translations of the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn translations(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "translations", Query::new(), None).await
    }

    /// Gets the trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn videos(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "videos", query, None).await
    }

    /// Gets the streaming, rent and buy providers per country.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn watch_providers(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "watch_providers", Query::new(), None)
            .await
    }

    /// Rates the movie. `value` runs from 0.5 to 10.0 in steps of 0.5.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn rating(
        &mut self,
        client: &RestClient,
        value: f64,
        session: Option<RatingSession>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(session.as_ref())?;
        let body = json!({ "value": value });
        self.call(client, "rating", query, Some(body)).await
    }

    /// Removes the session's rating of the movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn rating_delete(
        &mut self,
        client: &RestClient,
        session: Option<RatingSession>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(session.as_ref())?;
        self.call(client, "rating_delete", query, None).await
    }

    /// Gets the most recently added movie.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn latest(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "latest", query, None).await
    }

    /// Gets the movies currently in theatres.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn now_playing(
        &mut self,
        client: &RestClient,
        params: Option<MovieListingParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "now_playing", query, None).await
    }

    /// Gets the current popular movies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn popular(
        &mut self,
        client: &RestClient,
        params: Option<MovieListingParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "popular", query, None).await
    }

    /// Gets the top rated movies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn top_rated(
        &mut self,
        client: &RestClient,
        params: Option<MovieListingParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "top_rated", query, None).await
    }

    /// Gets the upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn upcoming(
        &mut self,
        client: &RestClient,
        params: Option<MovieListingParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "upcoming", query, None).await
    }

    /// Gets the release dates of the movie (legacy endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] without a movie id, or any error
    /// from the request.
    pub async fn releases(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "releases", Query::new(), None).await
    }
}

impl TmdbResource for Movies {
    const NAME: &'static str = "Movies";
    const BASE_PATH: &'static str = "movie";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "details", "/{id}"),
        ResourcePath::new(HttpMethod::Get, "account_states", "/{id}/account_states"),
        ResourcePath::new(
            HttpMethod::Get,
            "alternative_titles",
            "/{id}/alternative_titles",
        ),
        ResourcePath::new(HttpMethod::Get, "changes", "/{id}/changes"),
        ResourcePath::new(HttpMethod::Get, "credits", "/{id}/credits"),
        ResourcePath::new(HttpMethod::Get, "external_ids", "/{id}/external_ids"),
        ResourcePath::new(HttpMethod::Get, "images", "/{id}/images"),
        ResourcePath::new(HttpMethod::Get, "keywords", "/{id}/keywords"),
        ResourcePath::new(HttpMethod::Get, "lists", "/{id}/lists"),
        ResourcePath::new(HttpMethod::Get, "recommendations", "/{id}/recommendations"),
        ResourcePath::new(HttpMethod::Get, "release_dates", "/{id}/release_dates"),
        ResourcePath::new(HttpMethod::Get, "reviews", "/{id}/reviews"),
        ResourcePath::new(HttpMethod::Get, "similar_movies", "/{id}/similar_movies"),
        ResourcePath::new(HttpMethod::Get, "translations", "/{id}/translations"),
        ResourcePath::new(HttpMethod::Get, "videos", "/{id}/videos"),
        ResourcePath::new(HttpMethod::Get, "watch_providers", "/{id}/watch/providers"),
        ResourcePath::new(HttpMethod::Post, "rating", "/{id}/rating"),
        ResourcePath::new(HttpMethod::Delete, "rating_delete", "/{id}/rating"),
        ResourcePath::new(HttpMethod::Get, "latest", "/latest"),
        ResourcePath::new(HttpMethod::Get, "now_playing", "/now_playing"),
        ResourcePath::new(HttpMethod::Get, "popular", "/popular"),
        ResourcePath::new(HttpMethod::Get, "top_rated", "/top_rated"),
        ResourcePath::new(HttpMethod::Get, "upcoming", "/upcoming"),
        ResourcePath::new(HttpMethod::Get, "releases", "/{id}/releases"),
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
