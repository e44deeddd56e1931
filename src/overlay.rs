//! Intro overlay on the entry page.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent};

/// Milliseconds until the overlay hides on its own. Independent of the
/// stylesheet's animation timing; this is the hard removal.
pub const INTRO_HIDE_MS: u32 = 3800;

const OVERLAY_ID: &str = "introOverlay";

/// Wires up the overlay when the page has one: auto-hide after
/// [`INTRO_HIDE_MS`], skip on click, skip on Escape. Pages without the
/// element are left alone.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let Some(found) = document.get_element_by_id(OVERLAY_ID) else {
        debug!("no intro overlay on this page");
        return Ok(());
    };
    let Ok(overlay) = found.dyn_into::<HtmlElement>() else {
        return Ok(());
    };

    {
        let overlay = overlay.clone();
        Timeout::new(INTRO_HIDE_MS, move || hide(&overlay)).forget();
    }

    {
        let target = overlay.clone();
        let on_click = Closure::wrap(Box::new(move || hide(&target)) as Box<dyn FnMut()>);
        overlay.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let target = overlay.clone();
        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                hide(&target);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();
    }

    debug!("intro overlay armed, auto-hide in {INTRO_HIDE_MS}ms");
    Ok(())
}

/// Hides the overlay. Idempotent: the timer, a click and an Escape press may
/// all land in any order.
pub fn hide(overlay: &HtmlElement) {
    let _ = overlay.style().set_property("display", "none");
}
