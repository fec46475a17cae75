//! Element lifecycle controller.
//!
//! [`CustomElement`] owns everything a widget needs to live on a host node:
//! the props snapshot, the state container, the slot bindings and the host
//! itself. Concrete widgets implement [`Widget`] and only supply markup.
//!
//! The host environment drives the element through two reactions:
//! [`CustomElement::connected_callback`] when it becomes part of the document
//! and [`CustomElement::attribute_changed_callback`] when the reserved state
//! attribute changes. Both fully re-render; nothing is diffed.

use crate::error::{ElementError, Result};
use crate::fragment::Fragment;
use crate::host::HostElement;
use crate::props::Props;
use crate::settings::ElementSettings;
use crate::slot::SlotBindings;
use crate::state::State;

/// Trait for widgets hosted by a [`CustomElement`].
///
/// # Example
///
/// ```
/// use custom_elements_core::{CustomElement, Props, RenderContext, Result, State, Widget};
///
/// struct Badge;
///
/// impl Widget for Badge {
///     fn name(&self) -> &'static str {
///         "Badge"
///     }
///
///     fn tag_name(&self) -> &'static str {
///         "x-badge"
///     }
///
///     fn initial_state(&self, props: &Props) -> State {
///         State::new().with("label", props.get_str("label").unwrap_or_default())
///     }
///
///     fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
///         Ok(format!(
///             r#"<span class="badge">{}</span>"#,
///             ctx.state.get_str("label").unwrap_or_default()
///         ))
///     }
/// }
///
/// let mut badge = CustomElement::new(Badge, Props::new().with("label", "new"));
/// badge.connected_callback().unwrap();
/// assert_eq!(badge.inner_html(), r#"<span class="badge">new</span>"#);
/// ```
pub trait Widget {
	/// Returns the widget's name for diagnostics.
	fn name(&self) -> &'static str;

	/// Tag name of the host node created for this widget.
	fn tag_name(&self) -> &'static str;

	/// State the element starts with, derived from its props.
	fn initial_state(&self, _props: &Props) -> State {
		State::new()
	}

	/// Renders the markup for the current props and state.
	///
	/// Every widget has to provide this; the default fails with
	/// [`ElementError::NotImplemented`].
	fn render(&self, _ctx: &RenderContext<'_>) -> Result<String> {
		Err(ElementError::NotImplemented {
			widget: self.name(),
		})
	}
}

/// Data available to [`Widget::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
	/// Props snapshot taken at construction
	pub props: &'a Props,
	/// Current state
	pub state: &'a State,
}

/// Lifecycle phase of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// Props and state ready, not rendered yet.
	Constructed,
	/// Rendered with slots applied.
	Attached,
	/// State changed while attached; a re-render is in progress.
	Dirty,
}

/// A widget bound to its host node.
#[derive(Debug)]
pub struct CustomElement<W: Widget> {
	widget: W,
	host: HostElement,
	props: Props,
	state: State,
	slots: SlotBindings,
	settings: ElementSettings,
	phase: Phase,
}

impl<W: Widget> CustomElement<W> {
	/// Creates an element on a fresh host node with default settings.
	pub fn new(widget: W, props: Props) -> Self {
		Self::with_settings(widget, props, ElementSettings::default())
	}

	/// Creates an element on a fresh host node.
	pub fn with_settings(widget: W, props: Props, settings: ElementSettings) -> Self {
		let host = HostElement::new(widget.tag_name());
		Self::from_host(widget, host, props, settings)
	}

	/// Creates an element over an existing host node.
	///
	/// Exactly one direction of sync happens: when the host already has
	/// attributes they become the props and `props` is discarded, otherwise
	/// `props` are written onto the host as attributes and the snapshot keeps
	/// the lowercased names actually written. Slot bindings are captured from
	/// the host's children.
	pub fn from_host(
		widget: W,
		mut host: HostElement,
		props: Props,
		settings: ElementSettings,
	) -> Self {
		let props = if host.has_attributes() {
			if !props.is_empty() {
				tracing::debug!(
					widget = widget.name(),
					discarded = props.len(),
					"host attributes take precedence over supplied props"
				);
			}
			tracing::debug!(widget = widget.name(), "props assigned from attributes");
			host.attributes().collect::<Props>()
		} else {
			tracing::debug!(widget = widget.name(), "attributes assigned from props");
			// Attribute names are case-insensitive; keys that fold together
			// collapse to one entry holding the last value.
			let mut written = Props::new();
			for (key, value) in &props {
				host.set_attribute(key, value.to_string());
				written.insert(key.to_ascii_lowercase(), value.clone());
			}
			written
		};

		let slots = SlotBindings::capture(host.content(), &settings.slot_attribute);
		let state = widget.initial_state(&props);

		Self {
			widget,
			host,
			props,
			state,
			slots,
			settings,
			phase: Phase::Constructed,
		}
	}

	/// Props snapshot.
	pub fn props(&self) -> &Props {
		&self.props
	}

	/// Current state.
	pub fn state(&self) -> &State {
		&self.state
	}

	/// Slot bindings.
	pub fn slots(&self) -> &SlotBindings {
		&self.slots
	}

	/// Host node.
	pub fn host(&self) -> &HostElement {
		&self.host
	}

	/// The hosted widget.
	pub fn widget(&self) -> &W {
		&self.widget
	}

	/// Settings this element was built with.
	pub fn settings(&self) -> &ElementSettings {
		&self.settings
	}

	/// Lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Returns whether the element has been attached.
	pub fn is_attached(&self) -> bool {
		self.phase != Phase::Constructed
	}

	/// The host's current inner markup.
	pub fn inner_html(&self) -> String {
		self.host.inner_html()
	}

	/// Renders the widget for the current props and state.
	pub fn render(&self) -> Result<String> {
		self.widget.render(&RenderContext {
			props: &self.props,
			state: &self.state,
		})
	}

	/// Replaces the state and mirrors it onto the reserved state attribute.
	///
	/// The attribute write is followed by the host's attribute-change
	/// reaction, which re-renders when the element is attached.
	pub fn set_state(&mut self, state: State) -> Result<()> {
		let serialized = state.to_attribute_value()?;
		self.state = state;
		tracing::debug!(
			widget = self.widget.name(),
			entries = self.state.len(),
			"state updated"
		);

		let name = self.settings.state_attribute.clone();
		let old_value = self.host.set_attribute(&name, serialized.clone());
		self.attribute_changed_callback(&name, old_value.as_deref(), Some(serialized.as_str()))
	}

	/// Replaces the content bound to slot `name` and re-applies all slots to
	/// the live markup.
	///
	/// Nothing changes when the slot is unknown or the markup lacks a
	/// container under the strict policy.
	pub fn set_slot(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
		let mut slots = self.slots.clone();
		slots.replace(name, content)?;

		let mut fragment = self.host.content().clone();
		slots.apply(
			&mut fragment,
			&self.settings.slot_attribute,
			self.settings.slot_policy,
		)?;

		self.slots = slots;
		self.host.replace_content(fragment);
		tracing::debug!(widget = self.widget.name(), slot = name, "slot updated");
		Ok(())
	}

	/// Reaction to the element being inserted into the document.
	///
	/// Renders, applies the slot bindings to the new markup and installs it
	/// as the host's content.
	pub fn connected_callback(&mut self) -> Result<()> {
		self.refresh()?;
		self.phase = Phase::Attached;
		Ok(())
	}

	/// Reaction to an attribute change on the host.
	///
	/// Only the reserved state attribute is observed. Each call re-renders an
	/// attached element; calls are never coalesced.
	pub fn attribute_changed_callback(
		&mut self,
		name: &str,
		old_value: Option<&str>,
		new_value: Option<&str>,
	) -> Result<()> {
		if !name.eq_ignore_ascii_case(&self.settings.state_attribute) {
			return Ok(());
		}
		if !self.is_attached() {
			tracing::trace!(
				widget = self.widget.name(),
				"state attribute changed before attachment"
			);
			return Ok(());
		}
		tracing::trace!(
			widget = self.widget.name(),
			old = old_value,
			new = new_value,
			"state attribute changed"
		);

		let previous = self.phase;
		self.phase = Phase::Dirty;
		match self.refresh() {
			Ok(()) => {
				self.phase = Phase::Attached;
				Ok(())
			}
			Err(err) => {
				self.phase = previous;
				Err(err)
			}
		}
	}

	fn refresh(&mut self) -> Result<()> {
		let mut fragment = Fragment::parse(&self.render()?);
		let written = self.slots.apply(
			&mut fragment,
			&self.settings.slot_attribute,
			self.settings.slot_policy,
		)?;
		self.host.replace_content(fragment);
		tracing::trace!(widget = self.widget.name(), slots = written, "rendered");
		Ok(())
	}
}
