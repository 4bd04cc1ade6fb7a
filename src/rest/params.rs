//! Query parameter assembly.
//!
//! Operation parameters are plain structs deriving `Serialize`. Every field
//! is an `Option` skipped when `None`, so only arguments the caller actually
//! supplied reach the wire. Wire names that differ from field names are
//! declared with `#[serde(rename = "...")]` (e.g. `vote_average_gte` is sent
//! as `vote_average.gte`).
//!
//! [`serialize_to_query`] flattens such a struct into the string map sent as
//! the query string.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::ResourceError;

/// Query parameters as sent on the wire.
pub type Query = HashMap<String, String>;

/// Serializes a params struct to a query parameter map.
///
/// - `null` values are skipped
/// - booleans become `true` / `false`
/// - numbers use JSON formatting (`7.0` stays `7.0`)
/// - arrays are comma-joined
/// - nested objects are sent as JSON text
///
/// A value that does not serialize to an object (such as `()`) yields an
/// empty map.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if serialization fails.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use tmdb_api::rest::serialize_to_query;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(rename = "vote_average.gte")]
///     vote_average_gte: Option<f64>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     page: Option<u32>,
/// }
///
/// let query = serialize_to_query(&Params { vote_average_gte: Some(7.0), page: None }).unwrap();
/// assert_eq!(query.get("vote_average.gte").map(String::as_str), Some("7.0"));
/// assert!(!query.contains_key("page"));
/// ```
pub fn serialize_to_query<T: Serialize>(params: &T) -> Result<Query, ResourceError> {
    let value = serde_json::to_value(params).map_err(ResourceError::InvalidParams)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

/// Serializes optional params, treating `None` as no parameters.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if serialization fails.
pub fn optional_query<T: Serialize>(params: Option<&T>) -> Result<Query, ResourceError> {
    params.map_or_else(|| Ok(Query::new()), serialize_to_query)
}

/// Rewrites a `_gte` / `_lte` range suffix to the dotted wire form.
///
/// ```rust
/// use tmdb_api::rest::range_key;
///
/// assert_eq!(range_key("vote_count_gte"), "vote_count.gte");
/// assert_eq!(range_key("with_release_type"), "with_release_type");
/// assert_eq!(range_key("x_gte_y"), "x_gte_y");
/// ```
#[must_use]
pub fn range_key(key: &str) -> String {
    if let Some(stem) = key.strip_suffix("_gte") {
        format!("{stem}.gte")
    } else if let Some(stem) = key.strip_suffix("_lte") {
        format!("{stem}.lte")
    } else {
        key.to_string()
    }
}

/// Adds pass-through parameters without overriding keys already present.
///
/// Keys go through [`range_key`], so `vote_count_lte` is sent as
/// `vote_count.lte`.
#[allow(clippy::implicit_hasher)]
pub fn merge_extra(query: &mut Query, extra: &BTreeMap<String, String>) {
    for (key, value) in extra {
        query
            .entry(range_key(key))
            .or_insert_with(|| value.clone());
    }
}

/// Parameters taking only a display language (ISO 639-1, e.g. `en-US`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LanguageParams {
    /// ISO 639-1 language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Parameters for paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageParams {
    /// ISO 639-1 language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Page to query (1-1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Sort order accepted by account and guest session listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatedAtSort {
    /// Oldest first.
    #[serde(rename = "created_at.asc")]
    Asc,
    /// Newest first.
    #[serde(rename = "created_at.desc")]
    Desc,
}
