//! Button widget

use custom_elements_core::{Props, RenderContext, Result, State, Widget};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::component::{Variant, display_text};

/// Bootstrap button registered as `<bs-button>`.
///
/// Props: `id`, `text`, and optionally `variant` (default `primary`). The
/// label is kept in state so it can change after construction.
///
/// # Example
///
/// ```
/// use custom_elements_core::{CustomElement, State};
/// use custom_elements_widgets::{Button, ButtonProps};
///
/// let props = ButtonProps::new("b1", "Go").to_props().unwrap();
/// let mut button = CustomElement::new(Button, props);
/// button.connected_callback().unwrap();
/// assert!(button.inner_html().contains(">Go</button>"));
///
/// button.set_state(State::new().with("text", "Stop")).unwrap();
/// assert!(button.inner_html().contains(">Stop</button>"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Button;

impl Button {
	/// Tag name of the host element
	pub const TAG_NAME: &'static str = "bs-button";
}

impl Widget for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn tag_name(&self) -> &'static str {
		Self::TAG_NAME
	}

	fn initial_state(&self, props: &Props) -> State {
		State::new().with("text", props.get_string("text").unwrap_or_default())
	}

	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let id = ctx.props.get_string("id").unwrap_or_default();
		let variant = ctx
			.props
			.get_str("variant")
			.and_then(Variant::parse)
			.unwrap_or_default();
		let text = display_text(ctx.state.get("text"));

		Ok(format!(
			r#"<button id="{}--child" type="button" class="btn btn-{}">{}</button>"#,
			encode_double_quoted_attribute(&id),
			variant.as_str(),
			encode_text(&text),
		))
	}
}

/// Typed props for [`Button`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ButtonProps {
	/// Element id
	pub id: String,
	/// Button label
	pub text: String,
	/// Color variant
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variant: Option<Variant>,
}

impl ButtonProps {
	/// Create button props
	pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			variant: None,
		}
	}

	/// Set the color variant
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	/// Convert to element props
	pub fn to_props(&self) -> serde_json::Result<Props> {
		Props::from_serialize(self)
	}
}
