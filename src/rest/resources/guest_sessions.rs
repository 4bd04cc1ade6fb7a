//! Guest session resource implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::config::GuestSessionId;
use crate::rest::{
    optional_query, Attributes, CreatedAtSort, ResourceError, ResourcePath, TmdbResource,
};

/// Parameters for the guest session rated listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GuestRatedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<CreatedAtSort>,
}

/// The ratings made under a guest session.
#[derive(Debug, Clone)]
pub struct GuestSessions {
    pub guest_session_id: GuestSessionId,
    attributes: Attributes,
}

impl GuestSessions {
    #[must_use]
    pub fn new(guest_session_id: GuestSessionId) -> Self {
        Self {
            guest_session_id,
            attributes: Attributes::default(),
        }
    }

    /// Gets the movies rated in this guest session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn rated_movies(
        &mut self,
        client: &RestClient,
        params: Option<GuestRatedParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "rated_movies", query, None).await
    }

    /// Gets the TV shows rated in this guest session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn rated_tv(
        &mut self,
        client: &RestClient,
        params: Option<GuestRatedParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "rated_tv", query, None).await
    }

    /// Gets the TV episodes rated in this guest session.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn rated_tv_episodes(
        &mut self,
        client: &RestClient,
        params: Option<GuestRatedParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "rated_tv_episodes", query, None).await
    }
}

impl TmdbResource for GuestSessions {
    const NAME: &'static str = "GuestSessions";
    const BASE_PATH: &'static str = "guest_session";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            "rated_movies",
            "/{guest_session_id}/rated/movies",
        ),
        ResourcePath::new(HttpMethod::Get, "rated_tv", "/{guest_session_id}/rated/tv"),
        ResourcePath::new(
            HttpMethod::Get,
            "rated_tv_episodes",
            "/{guest_session_id}/rated/tv/episodes",
        ),
    ];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::from([(
            "guest_session_id",
            self.guest_session_id.as_ref().to_string(),
        )])
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
