//! The [`TmdbResource`] trait shared by every resource type.
//!
//! A resource declares a base path and a table of named endpoints. Its
//! methods assemble a query (and for POST/DELETE a JSON body) and hand them
//! to [`TmdbResource::call`], which resolves the endpoint, dispatches the
//! request, mirrors the response into the resource's [`Attributes`] and
//! returns the decoded JSON.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use tmdb_api::rest::{Attributes, ResourcePath, TmdbResource};
//! use tmdb_api::HttpMethod;
//!
//! pub struct Keyword {
//!     pub id: u64,
//!     attributes: Attributes,
//! }
//!
//! impl TmdbResource for Keyword {
//!     const NAME: &'static str = "Keyword";
//!     const BASE_PATH: &'static str = "keyword";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, "info", "/{id}"),
//!         ResourcePath::new(HttpMethod::Get, "movies", "/{id}/movies"),
//!     ];
//!
//!     fn path_ids(&self) -> HashMap<&'static str, String> {
//!         HashMap::from([("id", self.id.to_string())])
//!     }
//!
//!     fn attributes(&self) -> &Attributes { &self.attributes }
//!     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
//! }
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{build_path, get_path, Attributes, Query, ResourceError, ResourcePath};

/// A TMDB resource group bound to its identifiers.
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in errors and logs (e.g. "Movie")
/// - `BASE_PATH`: The path segment every endpoint hangs off (e.g. "movie")
/// - `PATHS`: The endpoint table
///
/// # Concurrency
///
/// [`call`](Self::call) takes `&mut self` because it writes the attribute
/// bag. A single resource value therefore serves one request at a time; the
/// shared [`RestClient`] can be used by any number of resources concurrently.
#[allow(async_fn_in_trait)]
pub trait TmdbResource: Send + Sync {
    /// The resource name used in error messages and logs.
    const NAME: &'static str;

    /// The base path, without leading or trailing slash.
    const BASE_PATH: &'static str;

    /// Available endpoints for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the identifiers available for placeholder substitution.
    ///
    /// Identifiers that are not known yet are simply left out; an endpoint
    /// that needs one fails with [`ResourceError::MissingId`].
    fn path_ids(&self) -> HashMap<&'static str, String>;

    /// Returns the mirrored response attributes.
    fn attributes(&self) -> &Attributes;

    /// Returns the mirrored response attributes mutably.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Returns a single mirrored attribute.
    #[must_use]
    fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes().get(key)
    }

    /// Resolves an endpoint name to its verb and full path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownEndpoint`] if the endpoint is not in
    /// [`PATHS`](Self::PATHS), or [`ResourceError::MissingId`] if a template
    /// placeholder has no value.
    fn resolve(&self, endpoint: &str) -> Result<(HttpMethod, String), ResourceError> {
        let path = get_path(Self::PATHS, endpoint).ok_or_else(|| {
            ResourceError::UnknownEndpoint {
                resource: Self::NAME,
                endpoint: endpoint.to_string(),
            }
        })?;

        let ids = self.path_ids();
        let suffix = build_path(path.template, &ids).map_err(|e| ResourceError::MissingId {
            resource: Self::NAME,
            placeholder: e.placeholder,
        })?;

        Ok((path.http_method, format!("{}{suffix}", Self::BASE_PATH)))
    }

    /// Dispatches a named endpoint and mirrors the response.
    ///
    /// An empty `query` sends no parameters beyond the credential. For POST
    /// endpoints a missing `body` is sent as `{}`; for GET it is ignored.
    ///
    /// # Errors
    ///
    /// Returns any [`ResourceError`] from path resolution or dispatch. The
    /// attribute bag is untouched on error.
    async fn call(
        &mut self,
        client: &RestClient,
        endpoint: &str,
        query: Query,
        body: Option<Value>,
    ) -> Result<Value, ResourceError> {
        let (method, path) = self.resolve(endpoint)?;
        let query = (!query.is_empty()).then_some(query);

        let response = match (method, body) {
            (HttpMethod::Get, _) => client.get(&path, query).await?,
            (HttpMethod::Post, body) => {
                let body = body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
                client.post(&path, body, query).await?
            }
            (HttpMethod::Delete, Some(body)) => client.delete_with_body(&path, body, query).await?,
            (HttpMethod::Delete, None) => client.delete(&path, query).await?,
        };

        let body = response.into_body();
        let mirrored = self.attributes_mut().mirror(&body);
        tracing::debug!(
            resource = Self::NAME,
            endpoint,
            mirrored,
            "Mirrored TMDB response"
        );

        Ok(body)
    }
}
