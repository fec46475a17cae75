//! Modal widget

use custom_elements_core::{Props, RenderContext, Result, State, Widget};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::component::{Size, display_text};

/// Bootstrap 3 modal registered as `<custom-modal>`.
///
/// Props:
/// - `id`: element id, also used for the label id
/// - `title`: heading text (default empty)
/// - `size`: dialog width, `sm` or `lg` through [`ModalProps`]; other
///   attribute values become a `modal-{size}` class unchanged (default none)
/// - `backdrop`: whether the modal has a backdrop (default true)
/// - `keyboard`: whether escape closes the modal (default true)
///
/// Body and footer content are supplied through the `modal-body` and
/// `modal-footer` slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modal;

impl Modal {
	/// Tag name of the host element
	pub const TAG_NAME: &'static str = "custom-modal";
	/// Slot holding the modal body
	pub const BODY_SLOT: &'static str = "modal-body";
	/// Slot holding the modal footer
	pub const FOOTER_SLOT: &'static str = "modal-footer";
	/// Every slot the template provides a container for
	pub const SLOTS: [&'static str; 2] = [Self::BODY_SLOT, Self::FOOTER_SLOT];
}

impl Widget for Modal {
	fn name(&self) -> &'static str {
		"Modal"
	}

	fn tag_name(&self) -> &'static str {
		Self::TAG_NAME
	}

	fn initial_state(&self, props: &Props) -> State {
		State::new().with("title", props.get_string("title").unwrap_or_default())
	}

	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let id = ctx.props.get_string("id").unwrap_or_default();
		let id = encode_double_quoted_attribute(&id);
		let size_class = match ctx.props.get_string("size") {
			Some(size) if !size.is_empty() => {
				format!(" modal-{}", encode_double_quoted_attribute(&size))
			}
			_ => String::new(),
		};
		let backdrop = ctx.props.flag("backdrop", true);
		let keyboard = ctx.props.flag("keyboard", true);
		let title = display_text(ctx.state.get("title"));

		Ok(format!(
			r#"<div class="modal fade" id="{id}--child" tabindex="-1" role="dialog" aria-labelledby="{id}-label" data-backdrop="{backdrop}" data-keyboard="{keyboard}">
	<div class="modal-dialog{size_class}" role="document">
		<div class="modal-content">
			<div class="modal-header">
				<button type="button" class="close" data-dismiss="modal" aria-label="Close">
					<span aria-hidden="true">&times;</span>
				</button>
				<h4 class="modal-title" id="{id}-label">{title}</h4>
			</div>
			<div class="modal-body" data-slot="{body}">
			</div>
			<div class="modal-footer" data-slot="{footer}">
			</div>
		</div>
	</div>
</div>"#,
			title = encode_text(&title),
			body = Self::BODY_SLOT,
			footer = Self::FOOTER_SLOT,
		))
	}
}

/// Typed props for [`Modal`]
#[derive(Debug, Clone, Serialize)]
pub struct ModalProps {
	/// Element id
	pub id: String,
	/// Heading text
	pub title: String,
	/// Dialog size
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size: Option<Size>,
	/// Show a backdrop
	pub backdrop: bool,
	/// Close on escape
	pub keyboard: bool,
}

impl ModalProps {
	/// Create modal props with defaults
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: String::new(),
			size: None,
			backdrop: true,
			keyboard: true,
		}
	}

	/// Set the heading text
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Set the dialog size
	pub fn size(mut self, size: Size) -> Self {
		self.size = Some(size);
		self
	}

	/// Enable or disable the backdrop
	pub fn backdrop(mut self, backdrop: bool) -> Self {
		self.backdrop = backdrop;
		self
	}

	/// Enable or disable closing on escape
	pub fn keyboard(mut self, keyboard: bool) -> Self {
		self.keyboard = keyboard;
		self
	}

	/// Convert to element props
	pub fn to_props(&self) -> serde_json::Result<Props> {
		Props::from_serialize(self)
	}
}
