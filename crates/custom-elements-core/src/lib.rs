//! Custom Elements Core
//!
//! The lifecycle controller behind custom-element style widgets. A widget
//! supplies markup; the controller takes care of the rest:
//!
//! - **Props**: initial configuration, synced one way with the host node's
//!   attributes at construction
//! - **State**: internal data replaced through [`CustomElement::set_state`] and
//!   mirrored onto a reserved attribute, which re-renders the element
//! - **Slots**: named regions whose content is captured from the host's
//!   children and written into every render
//!
//! ## Architecture
//!
//! - [`element`]: the [`Widget`] trait and the [`CustomElement`] controller
//! - [`host`]: the host node model (attributes and parsed content)
//! - [`fragment`]: parsed markup fragments
//! - [`props`], [`state`], [`slot`]: the data the controller owns
//! - [`settings`]: reserved attribute names and slot lookup policy
//!
//! The host environment's lifecycle reactions are explicit method calls:
//! [`CustomElement::connected_callback`] and
//! [`CustomElement::attribute_changed_callback`].

pub mod element;
pub mod error;
pub mod fragment;
pub mod host;
pub mod props;
pub mod settings;
pub mod slot;
pub mod state;

pub use element::{CustomElement, Phase, RenderContext, Widget};
pub use error::{ElementError, Result};
pub use fragment::Fragment;
pub use host::HostElement;
pub use props::{PropValue, Props};
pub use settings::{DEFAULT_SLOT_ATTRIBUTE, DEFAULT_STATE_ATTRIBUTE, ElementSettings, SlotPolicy};
pub use slot::{SlotBinding, SlotBindings};
pub use state::State;
