//! Props system for element properties.
//!
//! Props are the initial configuration of an element. They are supplied in
//! code or derived from the host node's attributes, and are read-only once
//! the element is constructed.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A primitive property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
	/// Boolean flag
	Bool(bool),
	/// Numeric value
	Number(serde_json::Number),
	/// Text value; every attribute-derived prop is text
	Text(String),
}

impl PropValue {
	/// Returns the text if this is a text value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Interprets the value as a flag.
	///
	/// Text `"false"`, `"0"` and `""` are false, as is the number zero.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Bool(b) => *b,
			Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
			Self::Text(s) => !matches!(s.as_str(), "" | "false" | "0"),
		}
	}
}

/// Attribute serialization of the value.
impl fmt::Display for PropValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => write!(f, "{}", b),
			Self::Number(n) => write!(f, "{}", n),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for PropValue {
	fn from(value: i32) -> Self {
		Self::Number(value.into())
	}
}

impl From<i64> for PropValue {
	fn from(value: i64) -> Self {
		Self::Number(value.into())
	}
}

impl From<u64> for PropValue {
	fn from(value: u64) -> Self {
		Self::Number(value.into())
	}
}

impl From<f64> for PropValue {
	fn from(value: f64) -> Self {
		match serde_json::Number::from_f64(value) {
			Some(n) => Self::Number(n),
			None => Self::Text(value.to_string()),
		}
	}
}

/// Ordered property map.
///
/// # Example
///
/// ```
/// use custom_elements_core::Props;
///
/// let props = Props::new()
///     .with("id", "m1")
///     .with("title", "Hi")
///     .with("backdrop", false);
///
/// assert_eq!(props.get_str("title"), Some("Hi"));
/// assert!(!props.flag("backdrop", true));
/// assert!(props.flag("keyboard", true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
	values: IndexMap<String, PropValue>,
}

impl Props {
	/// Creates empty props.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a property, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets a property, returning the previous value.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		self.values.insert(key.into(), value.into())
	}

	/// Returns a property.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.values.get(key)
	}

	/// Returns a text property.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(PropValue::as_str)
	}

	/// Returns a property in its attribute form, whatever its type.
	pub fn get_string(&self, key: &str) -> Option<String> {
		self.get(key).map(ToString::to_string)
	}

	/// Reads a property as a flag, falling back to `default` when absent.
	pub fn flag(&self, key: &str, default: bool) -> bool {
		self.get(key).map_or(default, PropValue::is_truthy)
	}

	/// Returns whether the property is present.
	pub fn contains(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Property names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	/// Iterates over the properties in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns whether there are no properties.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Converts any serializable struct into props.
	///
	/// Strings, booleans and numbers map directly. Nulls are skipped and
	/// composite values are stored as their JSON text.
	pub fn from_serialize<P: Serialize>(props: &P) -> Result<Self, serde_json::Error> {
		let json = serde_json::to_value(props)?;

		let mut values = IndexMap::new();
		if let serde_json::Value::Object(map) = json {
			for (key, value) in map {
				let prop = match value {
					serde_json::Value::String(s) => PropValue::Text(s),
					serde_json::Value::Bool(b) => PropValue::Bool(b),
					serde_json::Value::Number(n) => PropValue::Number(n),
					serde_json::Value::Null => continue,
					other => PropValue::Text(other.to_string()),
				};
				values.insert(key, prop);
			}
		}

		Ok(Self { values })
	}
}

impl<K, V> FromIterator<(K, V)> for Props
where
	K: Into<String>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Props {
	type Item = (&'a String, &'a PropValue);
	type IntoIter = indexmap::map::Iter<'a, String, PropValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}
