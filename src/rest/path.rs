//! Path building infrastructure for TMDB resources.
//!
//! Every resource declares a static endpoint table: one [`ResourcePath`] per
//! named operation, carrying the HTTP verb and a template relative to the
//! resource's base path. Templates use `{placeholder}` tokens that are filled
//! from the resource's identifiers.
//!
//! # Example
//!
//! ```rust
//! use tmdb_api::rest::{ResourcePath, get_path, build_path};
//! use tmdb_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, "details", "/{id}"),
//!     ResourcePath::new(HttpMethod::Get, "credits", "/{id}/credits"),
//! ];
//!
//! let path = get_path(PATHS, "credits").unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "550".to_string());
//! let url = build_path(path.template, &ids).unwrap();
//! assert_eq!(url, "/550/credits");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// A named endpoint of a resource.
///
/// # Path Templates
///
/// Templates are appended to the resource's base path:
/// - `""` - the base path itself (e.g. `account`)
/// - `/{id}` - a single identifier
/// - `/{guest_session_id}/rated/movies` - a session-scoped endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this endpoint.
    pub http_method: HttpMethod,
    /// The endpoint name (e.g., `"credits"`).
    pub name: &'static str,
    /// The URL template relative to the resource's base path.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(http_method: HttpMethod, name: &'static str, template: &'static str) -> Self {
        Self {
            http_method,
            name,
            template,
        }
    }
}

/// Looks up an endpoint by name.
#[must_use]
pub fn get_path<'a>(paths: &'a [ResourcePath], name: &str) -> Option<&'a ResourcePath> {
    paths.iter().find(|p| p.name == name)
}

/// A template placeholder had no value to substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPathId {
    /// The placeholder name without braces.
    pub placeholder: String,
}

/// Builds a URL from a template by interpolating identifiers.
///
/// Values are percent-encoded as path segments.
///
/// # Errors
///
/// Returns [`MissingPathId`] for the first placeholder with no entry in `ids`.
///
/// # Example
///
/// ```rust
/// use tmdb_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "my list");
///
/// assert_eq!(build_path("/{id}/clear", &ids).unwrap(), "/my%20list/clear");
/// assert!(build_path("/{guest_session_id}", &ids).is_err());
/// ```
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(
    template: &str,
    ids: &HashMap<&str, V>,
) -> Result<String, MissingPathId> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        result.push_str(&rest[..open]);

        let name = &rest[open + 1..close];
        let value = ids.get(name).ok_or_else(|| MissingPathId {
            placeholder: name.to_string(),
        })?;
        result.push_str(&urlencoding::encode(&value.to_string()));

        rest = &rest[close + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, "info", ""),
        ResourcePath::new(HttpMethod::Get, "lists", "/{id}/lists"),
        ResourcePath::new(HttpMethod::Post, "favorite", "/{id}/favorite"),
    ];

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = ResourcePath::new(
            HttpMethod::Get,
            "rated_movies",
            "/{guest_session_id}/rated/movies",
        );

        assert_eq!(path.http_method, HttpMethod::Get);
        assert_eq!(path.name, "rated_movies");
        assert_eq!(path.template, "/{guest_session_id}/rated/movies");
    }

    #[test]
    fn test_get_path_finds_by_name() {
        let favorite = get_path(PATHS, "favorite").unwrap();
        assert_eq!(favorite.http_method, HttpMethod::Post);
        assert_eq!(favorite.template, "/{id}/favorite");

        assert_eq!(get_path(PATHS, "info").unwrap().template, "");
    }

    #[test]
    fn test_get_path_returns_none_for_unknown_name() {
        assert!(get_path(PATHS, "watchlist").is_none());
    }

    #[test]
    fn test_build_path_single_id() {
        let mut ids = HashMap::new();
        ids.insert("id", 550u64);

        assert_eq!(build_path("/{id}", &ids).unwrap(), "/550");
    }

    #[test]
    fn test_build_path_template_without_placeholders() {
        let ids: HashMap<&str, String> = HashMap::new();

        assert_eq!(build_path("/movie/list", &ids).unwrap(), "/movie/list");
        assert_eq!(build_path("", &ids).unwrap(), "");
    }

    #[test]
    fn test_build_path_ignores_unused_ids() {
        let mut ids = HashMap::new();
        ids.insert("id", "10".to_string());
        ids.insert("session_id", "abc".to_string());

        assert_eq!(build_path("/{id}/lists", &ids).unwrap(), "/10/lists");
    }

    #[test]
    fn test_build_path_reports_missing_placeholder() {
        let ids: HashMap<&str, String> = HashMap::new();

        let err = build_path("/{id}/lists", &ids).unwrap_err();
        assert_eq!(err.placeholder, "id");
    }

    #[test]
    fn test_build_path_encodes_values() {
        let mut ids = HashMap::new();
        ids.insert("id", "a/b c");

        assert_eq!(build_path("/{id}", &ids).unwrap(), "/a%2Fb%20c");
    }
}
