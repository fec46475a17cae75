//! Widget state container.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Internal, mutable widget data.
///
/// Owned by a single element and replaced wholesale through
/// [`CustomElement::set_state`](crate::CustomElement::set_state).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
	values: IndexMap<String, Value>,
}

impl State {
	/// Creates empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an entry, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets an entry, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.values.insert(key.into(), value.into())
	}

	/// Returns an entry.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Returns a string entry.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Iterates over the entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns whether the state is empty.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Compact JSON written to the reserved state attribute.
	pub fn to_attribute_value(&self) -> serde_json::Result<String> {
		serde_json::to_string(&self.values)
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for State {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_attribute_value_is_compact_json() {
		let state = State::new().with("title", "Hi").with("open", true);
		assert_eq!(
			state.to_attribute_value().unwrap(),
			r#"{"title":"Hi","open":true}"#
		);
	}

	#[rstest]
	fn test_empty_state_serializes_to_empty_object() {
		assert_eq!(State::new().to_attribute_value().unwrap(), "{}");
	}

	#[rstest]
	fn test_nested_values() {
		let state = State::new().with("items", json!([1, 2, {"x": null}]));
		assert_eq!(state.get("items"), Some(&json!([1, 2, {"x": null}])));
		assert_eq!(state.get_str("items"), None);
	}
}
