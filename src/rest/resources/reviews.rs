//! Review resource implementation.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{Attributes, Query, ResourceError, ResourcePath, TmdbResource};

/// A user review. Review ids are strings.
#[derive(Debug, Clone)]
pub struct Reviews {
    pub id: String,
    attributes: Attributes,
}

impl Reviews {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::default(),
        }
    }

    /// Gets the review details.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "info", Query::new(), None).await
    }
}

impl TmdbResource for Reviews {
    const NAME: &'static str = "Reviews";
    const BASE_PATH: &'static str = "review";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(HttpMethod::Get, "info", "/{id}")];

    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::from([("id", self.id.clone())])
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
