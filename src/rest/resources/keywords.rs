//! Keyword resource implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    optional_query, Attributes, Query, ResourceError, ResourcePath, TmdbResource,
};

/// Parameters for [`Keywords::movies`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct KeywordMoviesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
}

/// A keyword.
#[derive(Debug, Clone)]
pub struct Keywords {
    pub id: u64,
    attributes: Attributes,
}

impl Keywords {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            attributes: Attributes::default(),
        }
    }

    /// Gets the keyword details.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn info(&mut self, client: &RestClient) -> Result<Value, ResourceError> {
        self.call(client, "info", Query::new(), None).await
    }

    /// Gets the movies tagged with the keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn movies(
        &mut self,
        client: &RestClient,
        params: Option<KeywordMoviesParams>,
    ) -> Result<Value, ResourceError> {
        let query = optional_query(params.as_ref())?;
        self.call(client, "movies", query, None).await
    }
}

impl TmdbResource for Keywords {
    const NAME: &'static str = "Keywords";
    const BASE_PATH: &'static str = "keyword";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", "/{id}"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;

    #[test]
    fn test_keyword_paths() {
        let keyword = Keywords::new(1721);
        assert_eq!(keyword.resolve("info").unwrap().1, "keyword/1721");
        assert_eq!(keyword.resolve("movies").unwrap().1, "keyword/1721/movies");
    }

    #[test]
    fn test_keyword_movies_params() {
        let query = serialize_to_query(&KeywordMoviesParams {
            include_adult: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("include_adult").map(String::as_str), Some("false"));
    }
}
