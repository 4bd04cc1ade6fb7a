//! List resource implementation.
//!
//! Reading a list needs only its id. Creating and changing one needs a user
//! session; those operations fail with [`ResourceError::MissingSession`] when
//! the resource was built without one.
//!
//! # Example
//!
//! ```rust,ignore
//! use tmdb_api::rest::resources::Lists;
//!
//! let mut list = Lists::for_session(session_id);
//! list.list_create(&client, "My List", "Movies to watch", None).await?;
//! // The new list id is now known
//! list.add_item(&client, 550).await?;
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{HttpMethod, RestClient};
use crate::config::SessionId;
use crate::rest::{
    optional_query, serialize_to_query, Attributes, LanguageParams, Query, ResourceError,
    ResourcePath, TmdbResource,
};

#[derive(Serialize)]
struct ItemStatusParams {
    movie_id: u64,
}

#[derive(Serialize)]
struct ClearParams<'a> {
    session_id: &'a SessionId,
    confirm: bool,
}

/// A user list.
#[derive(Debug, Clone, Default)]
pub struct Lists {
    /// The list id, once known.
    pub id: Option<String>,
    session_id: Option<SessionId>,
    attributes: Attributes,
}

impl Lists {
    /// Creates a handle for an existing list.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates a handle with a session and no list yet, ready for
    /// [`list_create`](Self::list_create).
    #[must_use]
    pub fn for_session(session_id: SessionId) -> Self {
        Self {
            session_id: Some(session_id),
            ..Self::default()
        }
    }

    /// Attaches a session to an existing handle.
    #[must_use]
    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    fn session(&self) -> Result<&SessionId, ResourceError> {
        self.session_id
            .as_ref()
            .ok_or(ResourceError::MissingSession {
                resource: Self::NAME,
            })
    }

    fn session_query(&self) -> Result<Query, ResourceError> {
        let session_id = self.session()?;
        Ok(Query::from([(
            "session_id".to_string(),
            session_id.as_ref().to_string(),
        )]))
    }

    /// Gets the details of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "info", query, None).await
    }

    /// Checks whether a movie is already on the list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn item_status(
        &mut self,
        client: &RestClient,
        movie_id: u64,
    ) -> Result<Value, ResourceError> {
        let query = serialize_to_query(&ItemStatusParams { movie_id })?;
        self.call(client, "item_status", query, None).await
    }

    /// Creates a new list owned by the session's user.
    ///
    /// `language` is sent as `null` when not given. The returned `list_id`
    /// becomes this handle's id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSession`] without a session, or any
    /// error from the request.
    pub async fn list_create(
        &mut self,
        client: &RestClient,
        name: &str,
        description: &str,
        language: Option<&str>,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query()?;
        let body = json!({
            "name": name,
            "description": description,
            "language": language,
        });

        let response = self.call(client, "list_create", query, Some(body)).await?;

        match response.get("list_id") {
            Some(Value::Number(n)) => self.id = Some(n.to_string()),
            Some(Value::String(s)) => self.id = Some(s.clone()),
            _ => self.id = None,
        }

        Ok(response)
    }

    /// Adds a movie to the list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSession`] without a session, or any
    /// error from the request.
    pub async fn add_item(
        &mut self,
        client: &RestClient,
        media_id: u64,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query()?;
        let body = json!({ "media_id": media_id });
        self.call(client, "add_item", query, Some(body)).await
    }

    /// Removes a movie from the list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSession`] without a session, or any
    /// error from the request.
    pub async fn remove_item(
        &mut self,
        client: &RestClient,
        media_id: u64,
    ) -> Result<Value, ResourceError> {
        let query = self.session_query()?;
        let body = json!({ "media_id": media_id });
        self.call(client, "remove_item", query, Some(body)).await
    }

    /// Removes every item from the list.
    ///
    /// The API only clears the list when `confirm` is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSession`] without a session, or any
    /// error from the request.
    pub async fn list_clear(
        &mut self,
        client: &RestClient,
        confirm: bool,
    ) -> Result<Value, ResourceError> {
        let session_id = self.session()?;
        let query = serialize_to_query(&ClearParams {
            session_id,
            confirm,
        })?;
        self.call(client, "list_clear", query, Some(json!({}))).await
    }

    /// Deletes the list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingSession`] without a session, or any
    /// error from the request.
    pub async fn list_delete(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        let query = self.session_query()?;
        self.call(client, "list_delete", query, None).await
    }
}

impl TmdbResource for Lists {
    const NAME: &'static str = "Lists";
    const BASE_PATH: &'static str = "list";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", "/{id}"),
        ResourcePath::new(HttpMethod::Get, "item_status", "/{id}/item_status"),
        ResourcePath::new(HttpMethod::Post, "list_create", ""),
        ResourcePath::new(HttpMethod::Post, "add_item", "/{id}/add_item"),
        ResourcePath::new(HttpMethod::Post, "remove_item", "/{id}/remove_item"),
        ResourcePath::new(HttpMethod::Post, "list_clear", "/{id}/clear"),
        ResourcePath::new(HttpMethod::Delete, "list_delete", "/{id}"),
    ];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        self.id
            .as_ref()
            .map(|id| HashMap::from([("id", id.clone())]))
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
    fn test_list_paths() {
        let list = Lists::new("509ec17b19c2950a0600050d");

        assert_eq!(
            list.resolve("info").unwrap().1,
            "list/509ec17b19c2950a0600050d"
        );
        assert_eq!(
            list.resolve("list_clear").unwrap(),
            (
                HttpMethod::Post,
                "list/509ec17b19c2950a0600050d/clear".to_string()
            )
        );
        assert_eq!(list.resolve("list_delete").unwrap().0, HttpMethod::Delete);
    }

    #[test]
    fn test_create_needs_no_id() {
        let list = Lists::for_session(session());

        assert_eq!(
            list.resolve("list_create").unwrap(),
            (HttpMethod::Post, "list".to_string())
        );
        assert!(list.resolve("add_item").is_err());
    }

    #[test]
    fn test_mutations_require_session() {
        let list = Lists::new("1");

        let err = list.session_query().unwrap_err();
        assert!(matches!(err, ResourceError::MissingSession { resource: "Lists" }));

        let list = list.with_session(session());
        let query = list.session_query().unwrap();
        assert_eq!(
            query.get("session_id").map(String::as_str),
            Some("79191836ddaa0da3df76a5ffef6f07ad6ab0c641")
        );
    }

    #[test]
    fn test_clear_params_confirm_is_lowercase() {
        let session_id = session();
        let query = serialize_to_query(&ClearParams {
            session_id: &session_id,
            confirm: true,
        })
        .unwrap();

        assert_eq!(query.get("confirm").map(String::as_str), Some("true"));
        assert_eq!(
            query.get("session_id").map(String::as_str),
            Some("79191836ddaa0da3df76a5ffef6f07ad6ab0c641")
        );
    }
}
