//! Collection resource implementation.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    optional_query, Attributes, LanguageParams, ResourceError, ResourcePath, TmdbResource,
};

/// A movie collection (e.g. a film series).
#[derive(Debug, Clone)]
pub struct Collections {
    pub id: u64,
    attributes: Attributes,
}

impl Collections {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            attributes: Attributes::default(),
        }
    }

    /// Gets the collection details.
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

    /// Gets the images of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn images(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "images", query, None).await
    }

    /// Gets the translations of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn translations(
        &mut self,
        client: &RestClient,
        params: Option<LanguageParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "translations", query, None).await
    }
}

impl TmdbResource for Collections {
    const NAME: &'static str = "Collections";
    const BASE_PATH: &'static str = "collection";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", "/{id}"),
        ResourcePath::new(HttpMethod::Get, "images", "/{id}/images"),
        ResourcePath::new(HttpMethod::Get, "translations", "/{id}/translations"),
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
