//! DOM-coupled checks that need a real browser. Pure logic (link
//! classification, validation, capability parsing, phase rules) is covered by
//! host-side unit tests; these exercise the wiring.
#![cfg(target_arch = "wasm32")]

use portfolio_scripts::config::PageCapabilities;
use portfolio_scripts::transition::{PageTransition, TransitionPhase};
use portfolio_scripts::{install_features, menu, overlay};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn page_body() -> HtmlElement {
    document().body().unwrap()
}

fn append_div(id: &str, class: &str) -> HtmlElement {
    let element = document().create_element("div").unwrap();
    if !id.is_empty() {
        element.set_id(id);
    }
    if !class.is_empty() {
        element.set_class_name(class);
    }
    page_body().append_child(&element).unwrap();
    element.dyn_into().unwrap()
}

fn dispatch_keydown(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_overlay_hides_on_click_and_stays_hidden() {
    let overlay_el = append_div("introOverlay", "");
    overlay::install(&document()).unwrap();

    assert_ne!(overlay_el.style().get_property_value("display").unwrap(), "none");
    overlay_el.click();
    assert_eq!(overlay_el.style().get_property_value("display").unwrap(), "none");

    // Every dismissal path funnels into the same idempotent hide.
    overlay::hide(&overlay_el);
    overlay::hide(&overlay_el);
    assert_eq!(overlay_el.style().get_property_value("display").unwrap(), "none");

    overlay_el.remove();
}

#[wasm_bindgen_test]
fn test_overlay_hides_on_escape_keydown() {
    let overlay_el = append_div("introOverlay", "");
    overlay::install(&document()).unwrap();

    // Other keys leave it alone.
    dispatch_keydown("Enter");
    assert_ne!(overlay_el.style().get_property_value("display").unwrap(), "none");

    dispatch_keydown("Escape");
    assert_eq!(overlay_el.style().get_property_value("display").unwrap(), "none");

    overlay_el.remove();
}

#[wasm_bindgen_test]
fn test_overlay_install_without_element_is_a_no_op() {
    assert!(document().get_element_by_id("introOverlay").is_none());
    overlay::install(&document()).unwrap();
}

#[wasm_bindgen_test]
fn test_menu_double_toggle_restores_visibility() {
    let button_el = document().create_element("button").unwrap();
    button_el.set_class_name("hamburger");
    page_body().append_child(&button_el).unwrap();
    let button: HtmlElement = button_el.dyn_into().unwrap();
    let panel = append_div("", "navlinks");

    menu::install(&document()).unwrap();

    button.click();
    assert!(button.class_list().contains("open"));
    assert_eq!(panel.style().get_property_value("display").unwrap(), "flex");
    assert_eq!(panel.style().get_property_value("position").unwrap(), "absolute");

    button.click();
    assert!(!button.class_list().contains("open"));
    assert_eq!(panel.style().get_property_value("display").unwrap(), "");

    button.remove();
    panel.remove();
}

#[wasm_bindgen_test]
fn test_capabilities_are_read_from_the_body_attribute() {
    let body = page_body();
    body.set_attribute("data-capabilities", r#"{"menu": false}"#)
        .unwrap();
    let capabilities = PageCapabilities::from_body(&body);
    assert!(!capabilities.menu);
    assert!(capabilities.transitions);

    body.remove_attribute("data-capabilities").unwrap();
    assert_eq!(PageCapabilities::from_body(&body), PageCapabilities::default());
}

#[wasm_bindgen_test]
fn test_disabled_menu_capability_leaves_the_button_inert() {
    let window = web_sys::window().unwrap();
    let body = page_body();
    let button_el = document().create_element("button").unwrap();
    button_el.set_class_name("hamburger");
    body.append_child(&button_el).unwrap();
    let button: HtmlElement = button_el.dyn_into().unwrap();

    body.set_attribute("data-capabilities", r#"{"menu": false}"#)
        .unwrap();
    let capabilities = PageCapabilities::from_body(&body);
    install_features(&window, &document(), body.clone(), capabilities);

    // The toggle was never wired, so clicking changes nothing.
    button.click();
    assert!(!button.class_list().contains("open"));

    body.remove_attribute("data-capabilities").unwrap();
    button.remove();
}

#[wasm_bindgen_test]
fn test_duplicate_exits_are_coalesced() {
    let transitions = PageTransition::new(page_body());
    assert!(transitions.begin_enter());
    assert_eq!(transitions.phase(), TransitionPhase::Entering);

    // Fragment targets keep the scheduled navigation from unloading the
    // test page when the timer fires.
    assert!(transitions.begin_exit("#first"));
    assert!(!transitions.begin_exit("#second"));
    assert!(!transitions.begin_enter());
    assert_eq!(transitions.phase(), TransitionPhase::Exiting);
}
