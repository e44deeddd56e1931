//! Page behaviors for the portfolio site, compiled to WebAssembly.
//!
//! Handles:
//! - smooth cross-page fade transitions (intercepts clicks on internal links)
//! - the intro overlay on the entry page
//! - the hamburger toggle on small screens
//! - the `scrollToProjects` helper
//! - client-side contact form validation
//!
//! One instantiation per page load. Every feature is wired independently and
//! tolerates missing markup, so a page only carries the behaviors it has
//! elements (and declared capabilities) for. Navigation throws the whole
//! document away, which is the only teardown any of this needs.

use std::rc::Rc;

use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Document, HtmlElement, Window};

pub mod config;
pub mod contact;
pub mod links;
pub mod menu;
pub mod overlay;
pub mod scroll;
pub mod transition;

use config::PageCapabilities;
use transition::PageTransition;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("portfolio scripts starting");
    run_when_ready(boot);
}

/// Runs `f` once the DOM is safe to query: immediately when the document has
/// already finished parsing, otherwise on `DOMContentLoaded`.
fn run_when_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("no document available, nothing to wire up");
        return;
    };
    if document.ready_state() == "loading" {
        let once = Closure::once_into_js(f);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())
            .is_err()
        {
            warn!("could not defer startup to DOMContentLoaded");
        }
    } else {
        f();
    }
}

/// Reads the capability set the page declares and wires it up.
fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        warn!("document has no body, skipping feature setup");
        return;
    };

    let capabilities = PageCapabilities::from_body(&body);
    info!("page capabilities: {capabilities:?}");
    install_features(&window, &document, body, capabilities);
}

/// Installs every feature enabled in `capabilities` against the given
/// document; disabled features are skipped entirely. Each feature is
/// installed in isolation: one failing installer logs and is skipped, the
/// rest still run.
pub fn install_features(
    window: &Window,
    document: &Document,
    body: HtmlElement,
    capabilities: PageCapabilities,
) {
    if capabilities.transitions {
        let transitions = Rc::new(PageTransition::new(body));
        if let Err(err) = links::install(document, Rc::clone(&transitions)) {
            warn!("link interception unavailable: {err:?}");
        }
        // Enter animation for this page load.
        transitions.begin_enter();
    }
    if capabilities.intro_overlay {
        if let Err(err) = overlay::install(document) {
            warn!("intro overlay unavailable: {err:?}");
        }
    }
    if capabilities.menu {
        if let Err(err) = menu::install(document) {
            warn!("hamburger menu unavailable: {err:?}");
        }
    }
    if capabilities.contact_form {
        if let Err(err) = contact::install(document) {
            warn!("contact form validation unavailable: {err:?}");
        }
    }
    if capabilities.scroll_helper {
        if let Err(err) = expose_scroll_helper(window) {
            warn!("scroll helper not reachable from markup: {err:?}");
        }
    }
}

/// Assigns the scroll helper onto `window` so inline
/// `onclick="scrollToProjects()"` handlers in the markup keep working
/// alongside the module export.
fn expose_scroll_helper(window: &Window) -> Result<(), JsValue> {
    let helper = Closure::wrap(Box::new(scroll::scroll_to_projects) as Box<dyn Fn()>);
    js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str(scroll::GLOBAL_NAME),
        helper.as_ref(),
    )?;
    helper.forget();
    Ok(())
}
