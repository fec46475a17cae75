//! Element settings.
//!
//! Controls the attribute names the controller reserves and how strictly slot
//! containers are looked up.

use serde::Deserialize;

use crate::error::Result;

/// Default attribute marking slot containers.
pub const DEFAULT_SLOT_ATTRIBUTE: &str = "data-slot";

/// Default attribute carrying the serialized widget state.
pub const DEFAULT_STATE_ATTRIBUTE: &str = "_state";

/// How slot application treats a bound slot with no container in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPolicy {
	/// Fail with [`ElementError::MissingSlotContainer`](crate::ElementError::MissingSlotContainer).
	#[default]
	Strict,
	/// Skip the binding and keep going.
	Lenient,
}

/// Settings shared by every element built with them.
///
/// # Example
///
/// ```
/// use custom_elements_core::{ElementSettings, SlotPolicy};
///
/// let settings = ElementSettings::from_toml_str(
///     r#"
/// slot_attribute = "data-region"
/// slot_policy = "lenient"
/// "#,
/// )
/// .unwrap();
///
/// assert_eq!(settings.slot_attribute, "data-region");
/// assert_eq!(settings.state_attribute, "_state");
/// assert_eq!(settings.slot_policy, SlotPolicy::Lenient);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementSettings {
	/// Attribute designating slot containers.
	pub slot_attribute: String,
	/// Reserved attribute used as the state change channel.
	pub state_attribute: String,
	/// Missing slot container handling.
	pub slot_policy: SlotPolicy,
}

impl Default for ElementSettings {
	fn default() -> Self {
		Self {
			slot_attribute: DEFAULT_SLOT_ATTRIBUTE.to_string(),
			state_attribute: DEFAULT_STATE_ATTRIBUTE.to_string(),
			slot_policy: SlotPolicy::Strict,
		}
	}
}

impl ElementSettings {
	/// Creates new default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Sets the slot designator attribute.
	pub fn slot_attribute(mut self, name: impl Into<String>) -> Self {
		self.slot_attribute = name.into();
		self
	}

	/// Sets the reserved state attribute.
	pub fn state_attribute(mut self, name: impl Into<String>) -> Self {
		self.state_attribute = name.into();
		self
	}

	/// Sets the slot policy.
	pub fn slot_policy(mut self, policy: SlotPolicy) -> Self {
		self.slot_policy = policy;
		self
	}

	/// Shortcut for [`SlotPolicy::Lenient`].
	pub fn lenient_slots(self) -> Self {
		self.slot_policy(SlotPolicy::Lenient)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ElementError;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = ElementSettings::default();
		assert_eq!(settings.slot_attribute, "data-slot");
		assert_eq!(settings.state_attribute, "_state");
		assert_eq!(settings.slot_policy, SlotPolicy::Strict);
	}

	#[rstest]
	fn test_builder() {
		let settings = ElementSettings::new()
			.slot_attribute("data-part")
			.state_attribute("data-state")
			.lenient_slots();
		assert_eq!(settings.slot_attribute, "data-part");
		assert_eq!(settings.state_attribute, "data-state");
		assert_eq!(settings.slot_policy, SlotPolicy::Lenient);
	}

	#[rstest]
	#[case("", SlotPolicy::Strict)]
	#[case("slot_policy = \"strict\"", SlotPolicy::Strict)]
	#[case("slot_policy = \"lenient\"", SlotPolicy::Lenient)]
	fn test_from_toml_policy(#[case] source: &str, #[case] expected: SlotPolicy) {
		let settings = ElementSettings::from_toml_str(source).unwrap();
		assert_eq!(settings.slot_policy, expected);
		assert_eq!(settings.slot_attribute, DEFAULT_SLOT_ATTRIBUTE);
	}

	#[rstest]
	fn test_from_toml_rejects_unknown_policy() {
		let result = ElementSettings::from_toml_str("slot_policy = \"sometimes\"");
		assert!(matches!(result, Err(ElementError::Settings(_))));
	}
}
