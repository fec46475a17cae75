//! Shared Bootstrap vocabulary for widgets

use serde::Serialize;
use serde_json::Value;

/// Contextual color, rendered as the `btn-{variant}` class suffix.
///
/// Unrecognized attribute values fall back to [`Variant::Primary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
	#[default]
	Primary,
	Secondary,
	Success,
	Danger,
	Warning,
	Info,
	Light,
	Dark,
}

impl Variant {
	/// Every variant, in declaration order.
	pub const ALL: [Self; 8] = [
		Self::Primary,
		Self::Secondary,
		Self::Success,
		Self::Danger,
		Self::Warning,
		Self::Info,
		Self::Light,
		Self::Dark,
	];

	/// Class suffix and attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Reads an attribute value; matching is exact.
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|variant| variant.as_str() == value)
	}
}

/// Modal dialog width.
///
/// Bootstrap 3 only ships `modal-sm` and `modal-lg`; the default width needs
/// no class. A `size` attribute read from markup is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
	Sm,
	Lg,
}

impl Size {
	/// Suffix of the `modal-{size}` class.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sm => "sm",
			Self::Lg => "lg",
		}
	}

	/// Reads an attribute value; matching is exact.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"sm" => Some(Self::Sm),
			"lg" => Some(Self::Lg),
			_ => None,
		}
	}
}

/// Text form of a state entry; absent and null entries are empty.
pub(crate) fn display_text(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => other.to_string(),
	}
}
