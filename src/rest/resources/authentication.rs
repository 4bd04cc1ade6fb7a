//! Authentication resource implementation.
//!
//! The user session flow is: [`token_new`](Authentication::token_new), have
//! the user approve the token (or call
//! [`token_validate_with_login`](Authentication::token_validate_with_login)),
//! then exchange it with [`session_new`](Authentication::session_new).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpMethod, RestClient};
use crate::config::SessionId;
use crate::rest::{
    optional_query, serialize_to_query, Attributes, Query, ResourceError, ResourcePath,
    TmdbResource,
};

/// Parameters for [`Authentication::session_new`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionNewParams {
    /// A request token approved by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token: Option<String>,
}

#[derive(Serialize)]
struct LoginParams<'a> {
    username: &'a str,
    password: &'a str,
    request_token: &'a str,
}

/// The `authentication` endpoints.
#[derive(Debug, Clone, Default)]
pub struct Authentication {
    attributes: Attributes,
}

impl Authentication {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a guest session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn guest_session_new(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "guest_session_new", Query::new(), None)
            .await
    }

    /// Creates a temporary request token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn token_new(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "token_new", Query::new(), None).await
    }

    /// Creates a session id from an approved request token.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn session_new(
        &mut self,
        client: &RestClient,
        params: Option<SessionNewParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "session_new", query, None).await
    }

    /// Validates a request token with the user's login credentials.
    ///
    /// The credentials travel in the query string, as the API requires.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn token_validate_with_login(
        &mut self,
        client: &RestClient,
        username: &str,
        password: &str,
        request_token: &str,
    ) -> Result<Value, ResourceError> {
        let query = serialize_to_query(&LoginParams {
            username,
            password,
            request_token,
        })?;
        self.call(client, "token_validate_with_login", query, None)
            .await
    }

    /// Deletes (logs out) a session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn session_delete(
        &mut self,
        client: &RestClient,
        session_id: &SessionId,
    ) -> Result<Value, ResourceError> {
        let body = json!({ "session_id": session_id.as_ref() });
        self.call(client, "session_delete", Query::new(), Some(body))
            .await
    }
}

impl TmdbResource for Authentication {
    const NAME: &'static str = "Authentication";
    const BASE_PATH: &'static str = "authentication";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "guest_session_new", "/guest_session/new"),
        ResourcePath::new(HttpMethod::Get, "token_new", "/token/new"),
        ResourcePath::new(HttpMethod::Get, "session_new", "/session/new"),
        ResourcePath::new(
            HttpMethod::Get,
            "token_validate_with_login",
            "/token/validate_with_login",
        ),
        ResourcePath::new(HttpMethod::Delete, "session_delete", "/session"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_paths() {
        let auth = Authentication::new();

        assert_eq!(
            auth.resolve("guest_session_new").unwrap().1,
            "authentication/guest_session/new"
        );
        assert_eq!(
            auth.resolve("token_validate_with_login").unwrap().1,
            "authentication/token/validate_with_login"
        );
        assert_eq!(
            auth.resolve("session_delete").unwrap(),
            (HttpMethod::Delete, "authentication/session".to_string())
        );
    }

    #[test]
    fn test_session_new_params_skip_missing_token() {
        assert!(serialize_to_query(&SessionNewParams::default())
            .unwrap()
            .is_empty());

        let query = serialize_to_query(&SessionNewParams {
            request_token: Some("641bf16c663db167c6cffcdff41126039d4445bf".to_string()),
        })
        .unwrap();
        assert_eq!(
            query.get("request_token").map(String::as_str),
            Some("641bf16c663db167c6cffcdff41126039d4445bf")
        );
    }

    #[test]
    fn test_login_params_are_all_sent() {
        let query = serialize_to_query(&LoginParams {
            username: "johnny_appleseed",
            password: "test123",
            request_token: "abc",
        })
        .unwrap();

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("username").map(String::as_str), Some("johnny_appleseed"));
    }
}
