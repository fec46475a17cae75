//! Custom Elements Widgets
//!
//! Bootstrap widgets built on [`custom_elements_core`]:
//!
//! - [`Button`] (`<bs-button>`)
//! - [`Modal`] (`<custom-modal>`) with `modal-body` and `modal-footer` slots
//!
//! Widgets only supply markup; props, state and slots are handled by
//! [`CustomElement`](custom_elements_core::CustomElement).

pub mod button;
pub mod component;
pub mod modal;

pub use button::{Button, ButtonProps};
pub use component::{Size, Variant};
pub use modal::{Modal, ModalProps};
