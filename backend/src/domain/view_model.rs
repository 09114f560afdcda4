//! Per-request view model handed to the renderer.

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::Error;

/// String-keyed parameter map for a single page render.
///
/// Built fresh per request, gains a `name` entry before the render, and is
/// discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel(Map<String, Value>);

impl ViewModel {
    /// Empty view model.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert a serialisable value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) -> Result<(), Error> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|error| {
            Error::internal(format!("view model value `{key}` failed to serialise: {error}"))
        })?;
        self.0.insert(key, value);
        Ok(())
    }

    /// Set the `name` entry shown in the page chrome.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.0.insert("name".to_owned(), Value::String(name.into()));
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether an entry exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl Serialize for ViewModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
