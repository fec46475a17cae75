//! Error types for custom-elements-core

use thiserror::Error;

/// Error type for element lifecycle operations
#[derive(Debug, Error)]
pub enum ElementError {
	/// The widget does not provide a render implementation
	#[error("You have to implement the render method ({widget})")]
	NotImplemented {
		/// Name of the widget missing the override
		widget: &'static str,
	},

	/// Rendered markup has no container for a bound slot
	#[error("No slot container for slot `{slot}` in rendered markup")]
	MissingSlotContainer {
		/// Slot name that could not be located
		slot: String,
	},

	/// No slot binding with this name was captured
	#[error("Unknown slot: {slot}")]
	UnknownSlot {
		/// Requested slot name
		slot: String,
	},

	/// Host markup did not contain an element
	#[error("Host markup does not contain an element")]
	NoHostElement,

	/// State could not be serialized onto the state attribute
	#[error("Failed to serialize state: {0}")]
	StateSerialization(#[from] serde_json::Error),

	/// Settings file could not be parsed
	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),
}

/// Result type for element lifecycle operations
pub type Result<T> = std::result::Result<T, ElementError>;
