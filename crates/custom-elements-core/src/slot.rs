//! Slot bindings.
//!
//! A slot is a named region of an element's rendered markup whose content is
//! supplied from outside. Bindings are captured once from the host's initial
//! children and written into every render.

use crate::error::{ElementError, Result};
use crate::fragment::Fragment;
use crate::settings::SlotPolicy;

/// A named piece of slot content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBinding {
	name: String,
	content: String,
}

impl SlotBinding {
	/// Creates a binding.
	pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
		}
	}

	/// Slot name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Bound markup.
	pub fn content(&self) -> &str {
		&self.content
	}
}

/// Ordered slot bindings with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotBindings {
	bindings: Vec<SlotBinding>,
}

impl SlotBindings {
	/// Creates an empty binding list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Captures one binding per outermost container designated by `attr`.
	///
	/// When a name repeats, the first container wins.
	pub fn capture(content: &Fragment, attr: &str) -> Self {
		let mut bindings = Self::new();
		for (name, markup) in content.slot_containers(attr) {
			if bindings.get(&name).is_some() {
				tracing::warn!(slot = %name, "duplicate slot container ignored");
				continue;
			}
			bindings.bindings.push(SlotBinding::new(name, markup));
		}
		bindings
	}

	/// Returns the content bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.bindings
			.iter()
			.find(|binding| binding.name == name)
			.map(SlotBinding::content)
	}

	/// Slot names in capture order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.bindings.iter().map(SlotBinding::name)
	}

	/// Iterates over the bindings in capture order.
	pub fn iter(&self) -> std::slice::Iter<'_, SlotBinding> {
		self.bindings.iter()
	}

	/// Number of bindings.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// Returns whether nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Replaces the content of `name`, returning the previous content.
	///
	/// Other bindings keep their position and content.
	pub fn replace(&mut self, name: &str, content: impl Into<String>) -> Result<String> {
		let binding = self
			.bindings
			.iter_mut()
			.find(|binding| binding.name == name)
			.ok_or_else(|| ElementError::UnknownSlot {
				slot: name.to_string(),
			})?;
		Ok(std::mem::replace(&mut binding.content, content.into()))
	}

	/// Writes every binding into its container in `fragment`.
	///
	/// Containers are resolved before anything is written, so a strict
	/// failure leaves `fragment` untouched. Returns the number of slots
	/// written.
	pub fn apply(&self, fragment: &mut Fragment, attr: &str, policy: SlotPolicy) -> Result<usize> {
		let mut targets = Vec::with_capacity(self.bindings.len());
		for binding in &self.bindings {
			match fragment.find(attr, &binding.name) {
				Some(id) => targets.push((id, binding)),
				None if policy == SlotPolicy::Strict => {
					return Err(ElementError::MissingSlotContainer {
						slot: binding.name.clone(),
					});
				}
				None => {
					tracing::debug!(slot = %binding.name, "slot container absent, skipped");
				}
			}
		}

		for (id, binding) in &targets {
			fragment.replace_children(*id, &binding.content);
		}
		Ok(targets.len())
	}
}

impl<'a> IntoIterator for &'a SlotBindings {
	type Item = &'a SlotBinding;
	type IntoIter = std::slice::Iter<'a, SlotBinding>;

	fn into_iter(self) -> Self::IntoIter {
		self.bindings.iter()
	}
}
