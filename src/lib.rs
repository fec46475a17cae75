//! # Custom Elements
//!
//! Custom-element style widgets for Rust: a widget supplies markup, and the
//! element controller syncs props with attributes, re-renders on state
//! changes and keeps named slot content in place across renders.
//!
//! ## Core Principles
//!
//! - **Composition over Inheritance**: widgets implement the [`Widget`] trait
//!   instead of extending a platform element type
//! - **Explicit Lifecycle**: host reactions (attachment, attribute changes) are
//!   plain method calls on [`CustomElement`]
//! - **Full Re-render**: every change re-renders the whole widget; nothing is
//!   diffed
//!
//! ## Feature Flags
//!
//! - `widgets` (default) - Bootstrap [`Button`] and [`Modal`] widgets
//!
//! ## Quick Example
//!
//! ```
//! use custom_elements::{CustomElement, ElementSettings, HostElement, Modal, Props};
//!
//! let host = HostElement::parse(
//!     r#"<custom-modal id="m1" title="Hi"><div data-slot="modal-body"><p>X</p></div></custom-modal>"#,
//! )
//! .unwrap();
//! let mut modal = CustomElement::from_host(Modal, host, Props::new(), ElementSettings::default());
//!
//! modal.connected_callback().unwrap();
//! assert!(modal.inner_html().contains(r#"<div class="modal-body" data-slot="modal-body"><p>X</p></div>"#));
//!
//! modal.set_slot("modal-body", "<p>Y</p>").unwrap();
//! assert!(modal.inner_html().contains("<p>Y</p>"));
//! ```

pub use custom_elements_core::{
	CustomElement, DEFAULT_SLOT_ATTRIBUTE, DEFAULT_STATE_ATTRIBUTE, ElementError,
	ElementSettings, Fragment, HostElement, Phase, PropValue, Props, RenderContext, Result,
	SlotBinding, SlotBindings, SlotPolicy, State, Widget,
};

#[cfg(feature = "widgets")]
pub use custom_elements_widgets::{Button, ButtonProps, Modal, ModalProps, Size, Variant};

/// Core crate, for items not re-exported at the top level.
pub mod core {
	pub use custom_elements_core::*;
}

/// Widget crate.
#[cfg(feature = "widgets")]
pub mod widgets {
	pub use custom_elements_widgets::*;
}
