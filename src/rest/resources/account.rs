//! Account resource implementation.
//!
//! Every account endpoint is scoped to a user session. The session id given
//! at construction is sent as the `session_id` query parameter on each call.
//! The numeric account id is learned from [`Account::info`] or supplied up
//! front with [`Account::with_id`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::{Account, AccountListParams, MediaType};
//! use tmdb_api::rest::CreatedAtSort;
//!
//! let mut account = Account::new(session_id);
//! account.info(&client).await?;
//!
//! let params = AccountListParams {
//!     sort_by: Some(CreatedAtSort::Desc),
//!     ..Default::default()
//! };
//! let favorites = account.favorite_movies(&client, Some(params)).await?;
//!
//! account.watchlist(&client, MediaType::Movie, 550, true).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpMethod, RestClient};
use crate::config::SessionId;
use crate::rest::{
    optional_query, Attributes, CreatedAtSort, PageParams, Query, ResourceError, ResourcePath,
    TmdbResource,
};

/// The kind of media a favorite or watchlist entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

/// Parameters for the favorite, rated and watchlist listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<CreatedAtSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// A TMDB user account, bound to a session.
#[derive(Debug, Clone)]
pub struct Account {
    /// The account id, once known.
    pub id: Option<u64>,
    session_id: SessionId,
    attributes: Attributes,
}

impl Account {
    /// Creates an account handle for the given session.
    #[must_use]
    pub fn new(session_id: SessionId) -> Self {
        Self {
            id: None,
            session_id,
            attributes: Attributes::default(),
        }
    }

    /// Sets the account id so listings can be called without [`info`](Self::info).
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the session this account is bound to.
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    fn session_query<T: Serialize>(&self, params: Option<&T>) -> Result<Query, ResourceError> {
        let mut query = optional_query(params)?;
        query.insert("session_id".to_string(), self.session_id.as_ref().to_string());
        Ok(query)
    }

    /// Gets the basic information for the account.
    ///
    /// The `id` of the response becomes this account's id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        let query = self.session_query::<()>(None)?;
        let body = self.call(client, "info", query, None).await?;

        if let Some(id) = body.get("id").and_then(Value::as_u64) {
            self.id = Some(id);
        }

        Ok(body)
    }

    /// Gets the lists the account has created.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn lists(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "lists", query, None).await
    }

    /// Gets the movies marked as favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn favorite_movies(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "favorite_movies", query, None).await
    }

    /// Gets the TV shows marked as favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn favorite_tv(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "favorite_tv", query, None).await
    }

    /// Marks or unmarks a movie or TV show as a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn favorite(
        &mut self,
        client: &RestClient,
        media_type: MediaType,
        media_id: u64,
        favorite: bool,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query::<()>(None)?;
        let body = json!({
            "media_type": media_type,
            "media_id": media_id,
            "favorite": favorite,
        });
        self.call(client, "favorite", query, Some(body)).await
    }

    /// Gets the movies the account has rated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn rated_movies(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "rated_movies", query, None).await
    }

    /// Gets the TV shows the account has rated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn rated_tv(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "rated_tv", query, None).await
    }

    /// Gets the TV episodes the account has rated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn rated_tv_episodes(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "rated_tv_episodes", query, None).await
    }

    /// Gets the movies on the account's watchlist.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn watchlist_movies(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "watchlist_movies", query, None).await
    }

    /// Gets the TV shows on the account's watchlist.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn watchlist_tv(
        &mut self,
        client: &RestClient,
        params: Option<AccountListParams>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query(params.as_ref())?;
        self.call(client, "watchlist_tv", query, None).await
    }

    /// Adds or removes a movie or TV show from the watchlist.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the account id is not known yet,
    /// or any error from the request.
    pub async fn watchlist(
        &mut self,
        client: &RestClient,
        media_type: MediaType,
        media_id: u64,
        watchlist: bool,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query::<()>(None)?;
        let body = json!({
            "media_type": media_type,
            "media_id": media_id,
            "watchlist": watchlist,
        });
        self.call(client, "watchlist", query, Some(body)).await
    }
}

impl TmdbResource for Account {
    const NAME: &'static str = "Account";
    const BASE_PATH: &'static str = "account";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", ""),
        ResourcePath::new(HttpMethod::Get, "lists", "/{id}/lists"),
        ResourcePath::new(HttpMethod::Get, "favorite_movies", "/{id}/favorite/movies"),
        ResourcePath::new(HttpMethod::Get, "favorite_tv", "/{id}/favorite/tv"),
        ResourcePath::new(HttpMethod::Post, "favorite", "/{id}/favorite"),
        ResourcePath::new(HttpMethod::Get, "rated_movies", "/{id}/rated/movies"),
        ResourcePath::new(HttpMethod::Get, "rated_tv", "/{id}/rated/tv"),
        ResourcePath::new(
            HttpMethod::Get,
            "rated_tv_episodes",
            "/{id}/rated/tv/episodes",
        ),
        ResourcePath::new(HttpMethod::Get, "watchlist_movies", "/{id}/watchlist/movies"),
        ResourcePath::new(HttpMethod::Get, "watchlist_tv", "/{id}/watchlist/tv"),
        ResourcePath::new(HttpMethod::Post, "watchlist", "/{id}/watchlist"),
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

    fn session() -> SessionId {
        SessionId::new("79191836ddaa0da3df76a5ffef6f07ad6ab0c641").unwrap()
    }

    #[test]
    fn test_info_resolves_to_base_path() {
        let account = Account::new(session());
        assert_eq!(
            account.resolve("info").unwrap(),
            (HttpMethod::Get, "account".to_string())
        );
    }

    #[test]
    fn test_listings_need_account_id() {
        let account = Account::new(session());
        let err = account.resolve("favorite_movies").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::MissingId { resource: "Account", ref placeholder } if placeholder == "id"
        ));
    }

    #[test]
    fn test_with_id_substitutes_placeholder() {
        let account = Account::new(session()).with_id(548);

        assert_eq!(
            account.resolve("rated_tv_episodes").unwrap().1,
            "account/548/rated/tv/episodes"
        );
        assert_eq!(
            account.resolve("watchlist").unwrap(),
            (HttpMethod::Post, "account/548/watchlist".to_string())
        );
    }

    #[test]
    fn test_session_query_always_carries_session() {
        let account = Account::new(session());

        let query = account.session_query::<()>(None).unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(
            query.get("session_id").map(String::as_str),
            Some("79191836ddaa0da3df76a5ffef6f07ad6ab0c641")
        );

        let params = AccountListParams {
            sort_by: Some(CreatedAtSort::Asc),
            page: Some(2),
            ..Default::default()
        };
        let query = account.session_query(Some(&params)).unwrap();
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("sort_by").map(String::as_str), Some("created_at.asc"));
        assert_eq!(query.get("page").map(String::as_str), Some("2"));
        assert!(!query.contains_key("language"));
    }

    #[test]
    fn test_media_type_is_lowercase() {
        assert_eq!(serde_json::to_value(MediaType::Movie).unwrap(), "movie");
        assert_eq!(serde_json::to_value(MediaType::Tv).unwrap(), "tv");
    }
}
