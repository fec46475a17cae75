//! Host element model.
//!
//! Stands in for the document node an element is bound to: an ordered
//! attribute map plus parsed content. Attribute names are ASCII-lowercased
//! the way HTML elements treat them.

use indexmap::IndexMap;
use scraper::{ElementRef, Html};

use crate::error::{ElementError, Result};
use crate::fragment::Fragment;

/// The node an element is bound to.
#[derive(Debug, Clone)]
pub struct HostElement {
	tag_name: String,
	attributes: IndexMap<String, String>,
	content: Fragment,
}

impl HostElement {
	/// Creates an element with no attributes and no children.
	pub fn new(tag_name: impl Into<String>) -> Self {
		Self {
			tag_name: tag_name.into().to_ascii_lowercase(),
			attributes: IndexMap::new(),
			content: Fragment::default(),
		}
	}

	/// Builds a host element from document markup.
	///
	/// The first element in `markup` becomes the host; its attributes and
	/// children are kept.
	///
	/// # Example
	///
	/// ```
	/// use custom_elements_core::HostElement;
	///
	/// let host = HostElement::parse(
	///     r#"<custom-modal id="m1"><div data-slot="modal-body"><p>X</p></div></custom-modal>"#,
	/// )
	/// .unwrap();
	///
	/// assert_eq!(host.tag_name(), "custom-modal");
	/// assert_eq!(host.get_attribute("id"), Some("m1"));
	/// assert_eq!(
	///     host.inner_html(),
	///     r#"<div data-slot="modal-body"><p>X</p></div>"#
	/// );
	/// ```
	pub fn parse(markup: &str) -> Result<Self> {
		let document = Html::parse_fragment(markup);
		let element = document
			.root_element()
			.children()
			.find_map(ElementRef::wrap)
			.ok_or(ElementError::NoHostElement)?;

		Ok(Self {
			tag_name: element.value().name().to_string(),
			attributes: element
				.value()
				.attrs()
				.map(|(name, value)| (name.to_string(), value.to_string()))
				.collect(),
			content: Fragment::parse(&element.inner_html()),
		})
	}

	/// Lowercase tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Returns an attribute value.
	pub fn get_attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	/// Sets an attribute, returning the previous value.
	///
	/// A new attribute is appended; an existing one keeps its position.
	pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
		self.attributes
			.insert(name.to_ascii_lowercase(), value.into())
	}

	/// Removes an attribute, returning its value.
	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		self.attributes.shift_remove(&name.to_ascii_lowercase())
	}

	/// Returns whether the attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains_key(&name.to_ascii_lowercase())
	}

	/// Returns whether any attribute is present.
	pub fn has_attributes(&self) -> bool {
		!self.attributes.is_empty()
	}

	/// Attribute names in order.
	pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
		self.attributes.keys().map(String::as_str)
	}

	/// Attributes in order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Serialized children.
	pub fn inner_html(&self) -> String {
		self.content.inner_html()
	}

	/// Replaces the children with parsed `markup`.
	pub fn set_inner_html(&mut self, markup: &str) {
		self.content = Fragment::parse(markup);
	}

	/// Parsed children.
	pub fn content(&self) -> &Fragment {
		&self.content
	}

	/// Replaces the children with an already parsed fragment.
	pub fn replace_content(&mut self, content: Fragment) {
		self.content = content;
	}

	/// Serializes the element with its attributes and children.
	pub fn outer_html(&self) -> String {
		let mut html = format!("<{}", self.tag_name);
		for (name, value) in &self.attributes {
			html.push_str(&format!(
				" {}=\"{}\"",
				name,
				html_escape::encode_double_quoted_attribute(value)
			));
		}
		html.push('>');
		html.push_str(&self.inner_html());
		html.push_str(&format!("</{}>", self.tag_name));
		html
	}
}
