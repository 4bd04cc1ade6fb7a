//! Company resource implementation.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    optional_query, Attributes, PageParams, Query, ResourceError, ResourcePath, TmdbResource,
};

/// A production company.
#[derive(Debug, Clone)]
pub struct Companies {
    pub id: u64,
    attributes: Attributes,
}

impl Companies {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            attributes: Attributes::default(),
        }
    }

    /// Gets the company details.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "info", Query::new(), None).await
    }

    /// Gets the alternative names of the company.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn alternative_names(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "alternative_names", Query::new(), None)
            .await
    }

    /// Gets the company logos.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn images(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "images", Query::new(), None).await
    }

    /// Gets the movies of the company (legacy endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn movies(
        &mut self,
        client: &RestClient,
        params: Option<PageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "movies", query, None).await
    }
}

impl TmdbResource for Companies {
    const NAME: &'static str = "Companies";
    const BASE_PATH: &'static str = "company";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", "/{id}"),
        ResourcePath::new(HttpMethod::Get, "alternative_names", "/{id}/alternative_names"),
        ResourcePath::new(HttpMethod::Get, "images", "/{id}/images"),
        ResourcePath::new(HttpMethod::Get, "movies", "/{id}/movies"),
    ];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::from([("id", self.id.to_string())])
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
