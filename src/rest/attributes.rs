//! Attribute bag mirrored from API responses.
//!
//! Every resource owns an [`Attributes`] map. After each successful call the
//! top-level keys of an object-shaped response are copied into it, replacing
//! earlier values with the same key. Array and scalar responses leave it
//! untouched.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Response fields mirrored onto a resource.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tmdb_api::rest::Attributes;
///
/// let mut attrs = Attributes::default();
/// attrs.mirror(&json!({"id": 550, "title": "Fight Club"}));
/// attrs.mirror(&json!({"title": "Fight Club (1999)"}));
///
/// assert_eq!(attrs.get_as::<u64>("id"), Some(550));
/// assert_eq!(attrs.get("title"), Some(&json!("Fight Club (1999)")));
///
/// attrs.mirror(&json!([1, 2, 3]));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Copies every top-level key of an object into the bag.
    ///
    /// Returns the number of keys written. Non-object values write nothing.
    pub fn mirror(&mut self, value: &Value) -> usize {
        let Value::Object(map) = value else {
            return 0;
        };
        for (key, val) in map {
            self.0.insert(key.clone(), val.clone());
        }
        map.len()
    }

    /// Returns the raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for a key decoded as `T`, or `None` if absent or
    /// of another shape.
    #[must_use]
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Returns `true` if the key has been mirrored.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of mirrored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been mirrored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over mirrored keys and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Removes every mirrored key.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
