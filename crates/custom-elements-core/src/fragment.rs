//! Parsed markup fragments.
//!
//! Element content is kept as a parsed tree rather than a string so slot
//! containers can be located and patched the way a browser does it when
//! `innerHTML` is assigned.

use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::{ElementRef, Html, Node};

/// A parsed HTML fragment.
#[derive(Debug, Clone)]
pub struct Fragment {
	html: Html,
}

impl Default for Fragment {
	fn default() -> Self {
		Self::parse("")
	}
}

impl Fragment {
	/// Parses markup in body context.
	pub fn parse(markup: &str) -> Self {
		Self {
			html: Html::parse_fragment(markup),
		}
	}

	/// Serializes the fragment back to markup.
	pub fn inner_html(&self) -> String {
		self.html.root_element().inner_html()
	}

	/// Returns whether the fragment has no nodes.
	pub fn is_empty(&self) -> bool {
		!self.html.root_element().has_children()
	}

	/// Outermost elements carrying `attr`, as `(attribute value, inner markup)`.
	///
	/// Designators nested inside another designated element belong to that
	/// element's content and are not reported.
	pub fn slot_containers(&self, attr: &str) -> Vec<(String, String)> {
		self.outermost(attr)
			.filter_map(|element| {
				let name = element.value().attr(attr)?;
				Some((name.to_string(), element.inner_html()))
			})
			.collect()
	}

	/// First outermost element, in document order, whose `attr` equals
	/// `value`.
	///
	/// A designator inside another designated element is slot content, not a
	/// container, and never matches.
	pub fn find(&self, attr: &str, value: &str) -> Option<NodeId> {
		self.outermost(attr)
			.find(|element| element.value().attr(attr) == Some(value))
			.map(|element| element.id())
	}

	/// Inner markup of the container [`Fragment::find`] resolves.
	pub fn inner_html_of(&self, attr: &str, value: &str) -> Option<String> {
		let id = self.find(attr, value)?;
		let node = self.html.tree.get(id)?;
		ElementRef::wrap(node).map(|element| element.inner_html())
	}

	/// Replaces the children of `id` with the parsed `markup`.
	///
	/// Returns `false` when `id` does not belong to this fragment.
	pub fn replace_children(&mut self, id: NodeId, markup: &str) -> bool {
		let source = Html::parse_fragment(markup);
		let Some(mut target) = self.html.tree.get_mut(id) else {
			return false;
		};
		while let Some(mut child) = target.first_child() {
			child.detach();
		}
		graft(&mut target, *source.root_element());
		true
	}

	fn outermost<'a>(&'a self, attr: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
		let root = self.html.root_element();
		root.descendants()
			.skip(1)
			.filter_map(ElementRef::wrap)
			.filter(move |element| {
				element.value().attr(attr).is_some()
					&& !(**element)
						.ancestors()
						.take_while(|ancestor| ancestor.id() != root.id())
						.filter_map(ElementRef::wrap)
						.any(|ancestor| ancestor.value().attr(attr).is_some())
			})
	}
}

fn graft(parent: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
	for child in source.children() {
		let mut appended = parent.append(child.value().clone());
		graft(&mut appended, child);
	}
}
