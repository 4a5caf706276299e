//! Field deserializers that never reject a record.
//!
//! Vendor payloads drift: list elements lose their tag, scalars turn up as `null`, objects
//! appear where arrays were expected. Fields decoded through these helpers fall back to their
//! `Default` instead of failing the surrounding record, so a single bad element costs only
//! that element.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

fn or_default<T: DeserializeOwned + Default>(value: Value) -> T {
	if value.is_null() {
		return T::default();
	}
	serde_json::from_value(value).unwrap_or_else(|err| {
		debug!("Ignoring malformed documentation field: {err}");
		T::default()
	})
}

fn elements_of<T: DeserializeOwned + Default>(value: Value) -> Vec<T> {
	match value {
		Value::Array(items) => items.into_iter().map(or_default).collect(),
		_ => Vec::new(),
	}
}

/// Decode a single value; `null` and malformed input yield `T::default()`.
pub fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Value::deserialize(deserializer).map(or_default)
}

/// Decode a list element by element, replacing malformed elements with `T::default()`.
///
/// Anything that is not an array decodes to an empty list.
pub fn elements<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Value::deserialize(deserializer).map(elements_of)
}

/// Like [`elements`], but keeps `null` distinct from an empty list.
pub fn optional_elements<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Value::deserialize(deserializer).map(|value| match value {
		Value::Null => None,
		other => Some(elements_of(other)),
	})
}

/// Decode an object entry by entry, preserving key order.
pub fn entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Value::deserialize(deserializer).map(|value| match value {
		Value::Object(map) => map
			.into_iter()
			.map(|(key, entry)| (key, or_default(entry)))
			.collect(),
		_ => IndexMap::new(),
	})
}
