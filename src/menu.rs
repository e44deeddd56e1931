//! Hamburger menu toggle for small screens.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const HAMBURGER_SELECTOR: &str = ".hamburger";
const NAVLINKS_SELECTOR: &str = ".navlinks";
const OPEN_CLASS: &str = "open";

/// Inline layout applied when the panel opens. Closing only clears `display`,
/// so the stylesheet's small-screen default takes back over; the remaining
/// properties are inert while the panel is hidden.
const OPEN_LAYOUT: [(&str, &str); 8] = [
    ("display", "flex"),
    ("flex-direction", "column"),
    (
        "background",
        "linear-gradient(180deg, rgba(20,20,20,0.95), rgba(0,0,0,0.9))",
    ),
    ("position", "absolute"),
    ("right", "20px"),
    ("top", "64px"),
    ("padding", "12px"),
    ("border-radius", "10px"),
];

/// Wires the hamburger button up to the navigation panel.
///
/// Without a button the feature is off. Without a panel the button still
/// toggles its own `open` styling, matching how the site always behaved.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let Ok(Some(button)) = document.query_selector(HAMBURGER_SELECTOR) else {
        debug!("no hamburger button on this page");
        return Ok(());
    };
    let panel = document
        .query_selector(NAVLINKS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    let button_in_handler = button.clone();
    let on_click = Closure::wrap(
        Box::new(move || toggle(&button_in_handler, panel.as_ref())) as Box<dyn FnMut()>
    );
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    debug!("hamburger menu armed");
    Ok(())
}

/// Flips the button's `open` class and the panel between hidden and the
/// explicit open layout. Two calls in a row restore the prior visibility.
pub fn toggle(button: &Element, panel: Option<&HtmlElement>) {
    let _ = button.class_list().toggle(OPEN_CLASS);
    let Some(panel) = panel else {
        return;
    };
    let style = panel.style();
    let open = style
        .get_property_value("display")
        .map(|display| display == "flex")
        .unwrap_or(false);
    if open {
        let _ = style.set_property("display", "");
    } else {
        for (property, value) in OPEN_LAYOUT {
            let _ = style.set_property(property, value);
        }
    }
}
