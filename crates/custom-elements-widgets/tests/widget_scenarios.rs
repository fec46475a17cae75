//! Widget scenario tests
//!
//! Drives the button and modal through construction, attachment, state
//! changes and slot updates, inspecting the resulting markup with a real
//! HTML parser.

use custom_elements_core::{CustomElement, ElementSettings, HostElement, Props, State};
use custom_elements_widgets::{Button, ButtonProps, Modal, ModalProps, Size};
use rstest::*;
use scraper::{Html, Selector};

fn select_one(html: &str, selector: &str) -> Option<(String, String)> {
	let document = Html::parse_fragment(html);
	let selector = Selector::parse(selector).unwrap();
	document
		.select(&selector)
		.next()
		.map(|element| (element.text().collect::<String>(), element.inner_html()))
}

fn attribute_of(html: &str, selector: &str, attribute: &str) -> Option<String> {
	let document = Html::parse_fragment(html);
	let selector = Selector::parse(selector).unwrap();
	document
		.select(&selector)
		.next()
		.and_then(|element| element.value().attr(attribute).map(str::to_string))
}

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn modal_props() -> Props {
	Props::new()
		.with("id", "m1")
		.with("title", "Hi")
		.with("size", "lg")
		.with("backdrop", false)
		.with("keyboard", true)
}

#[fixture]
fn slotted_modal() -> CustomElement<Modal> {
	let host = HostElement::parse(
		r#"<custom-modal><div data-slot="modal-body"><p>X</p></div><div data-slot="modal-footer"><button>OK</button></div></custom-modal>"#,
	)
	.unwrap();
	let mut modal = CustomElement::from_host(
		Modal,
		host,
		ModalProps::new("m2").title("Slots").to_props().unwrap(),
		ElementSettings::default(),
	);
	modal.connected_callback().unwrap();
	modal
}

// ============================================================================
// Button
// ============================================================================

/// Tests the button construction and attachment scenario
#[rstest]
fn test_button_scenario() {
	let mut button = CustomElement::new(Button, Props::new().with("id", "b1").with("text", "Go"));

	assert_eq!(button.host().get_attribute("id"), Some("b1"));
	assert_eq!(button.host().get_attribute("text"), Some("Go"));

	button.connected_callback().unwrap();

	let (text, _) = select_one(&button.inner_html(), r#"button[type="button"]"#).unwrap();
	assert_eq!(text, "Go");
	assert_eq!(
		attribute_of(&button.inner_html(), "button", "id").as_deref(),
		Some("b1--child")
	);
}

/// Tests a button declared in host markup
#[rstest]
fn test_button_from_markup() {
	let host =
		HostElement::parse(r#"<bs-button id="save" text="Save" variant="success"></bs-button>"#)
			.unwrap();
	let mut button = CustomElement::from_host(
		Button,
		host,
		ButtonProps::new("ignored", "Ignored").to_props().unwrap(),
		ElementSettings::default(),
	);

	button.connected_callback().unwrap();

	let html = button.inner_html();
	assert_eq!(select_one(&html, "button.btn-success").unwrap().0, "Save");
	assert_eq!(attribute_of(&html, "button", "id").as_deref(), Some("save--child"));
}

/// Tests that relabeling through state re-renders
#[rstest]
fn test_button_relabel() {
	let mut button = CustomElement::new(Button, Props::new().with("id", "b1").with("text", "Go"));
	button.connected_callback().unwrap();

	button.set_state(State::new().with("text", "Stop")).unwrap();

	assert_eq!(select_one(&button.inner_html(), "button").unwrap().0, "Stop");
	assert_eq!(button.props().get_str("text"), Some("Go"));
}

// ============================================================================
// Modal
// ============================================================================

/// Tests the modal rendering scenario
#[rstest]
fn test_modal_scenario(modal_props: Props) {
	let mut modal = CustomElement::new(Modal, modal_props);
	modal.connected_callback().unwrap();
	let html = modal.inner_html();

	assert!(select_one(&html, "div.modal-dialog.modal-lg").is_some());
	assert_eq!(
		attribute_of(&html, "div.modal", "data-backdrop").as_deref(),
		Some("false")
	);
	assert_eq!(
		attribute_of(&html, "div.modal", "data-keyboard").as_deref(),
		Some("true")
	);
	assert_eq!(select_one(&html, "h4.modal-title").unwrap().0, "Hi");
}

/// Tests that typed props match the untyped scenario
#[rstest]
fn test_modal_typed_props_equivalent(modal_props: Props) {
	let typed = ModalProps::new("m1")
		.title("Hi")
		.size(Size::Lg)
		.backdrop(false)
		.keyboard(true)
		.to_props()
		.unwrap();

	let a = CustomElement::new(Modal, typed).render().unwrap();
	let b = CustomElement::new(Modal, modal_props).render().unwrap();

	assert_eq!(a, b);
}

/// Tests attribute-derived flags on the modal
#[rstest]
fn test_modal_flags_from_markup() {
	let host =
		HostElement::parse(r#"<custom-modal id="m3" backdrop="false" keyboard="false"></custom-modal>"#)
			.unwrap();
	let mut modal =
		CustomElement::from_host(Modal, host, Props::new(), ElementSettings::default());

	modal.connected_callback().unwrap();

	let html = modal.inner_html();
	assert_eq!(attribute_of(&html, "div.modal", "data-backdrop").as_deref(), Some("false"));
	assert_eq!(attribute_of(&html, "div.modal", "data-keyboard").as_deref(), Some("false"));
}

/// Tests slot application and a single slot update on the modal
#[rstest]
fn test_modal_slot_scenario(mut slotted_modal: CustomElement<Modal>) {
	let html = slotted_modal.inner_html();
	assert_eq!(
		select_one(&html, r#"[data-slot="modal-body"]"#).unwrap().1,
		"<p>X</p>"
	);
	let footer_before = select_one(&html, r#"[data-slot="modal-footer"]"#).unwrap().1;
	assert_eq!(footer_before, "<button>OK</button>");

	slotted_modal.set_slot(Modal::BODY_SLOT, "<p>Y</p>").unwrap();

	let html = slotted_modal.inner_html();
	assert_eq!(
		select_one(&html, r#"[data-slot="modal-body"]"#).unwrap().1,
		"<p>Y</p>"
	);
	assert_eq!(
		select_one(&html, r#"[data-slot="modal-footer"]"#).unwrap().1,
		footer_before
	);
}

/// Tests that a title change keeps slot content
#[rstest]
fn test_modal_retitle_keeps_slots(mut slotted_modal: CustomElement<Modal>) {
	slotted_modal
		.set_state(State::new().with("title", "Renamed"))
		.unwrap();

	let html = slotted_modal.inner_html();
	assert_eq!(select_one(&html, "h4.modal-title").unwrap().0, "Renamed");
	assert_eq!(
		select_one(&html, r#"[data-slot="modal-body"]"#).unwrap().1,
		"<p>X</p>"
	);
}

/// Tests that only captured slots are written
#[rstest]
fn test_modal_without_footer_content() {
	let host = HostElement::parse(
		r#"<custom-modal id="m4"><div data-slot="modal-body">only body</div></custom-modal>"#,
	)
	.unwrap();
	let mut modal =
		CustomElement::from_host(Modal, host, Props::new(), ElementSettings::default());
	modal.connected_callback().unwrap();

	let html = modal.inner_html();
	assert_eq!(select_one(&html, ".modal-body").unwrap().1, "only body");
	assert_eq!(select_one(&html, ".modal-footer").unwrap().1.trim(), "");
}

/// Tests that rendering is deterministic
#[rstest]
fn test_modal_render_is_deterministic(modal_props: Props) {
	let modal = CustomElement::new(Modal, modal_props);
	assert_eq!(modal.render().unwrap(), modal.render().unwrap());
}
