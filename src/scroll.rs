//! Scroll-to-projects helper, callable from markup.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const TARGET_ID: &str = "projects-preview";
const FALLBACK_HREF: &str = "projects.html";

/// Name the helper is reachable under from inline `onclick` handlers.
pub const GLOBAL_NAME: &str = "scrollToProjects";

/// Smooth-scrolls to the projects preview, or navigates to the projects page
/// when the current document has no preview section. The fallback deliberately
/// treats "element missing" as "wrong page".
#[wasm_bindgen(js_name = scrollToProjects)]
pub fn scroll_to_projects() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    match document.get_element_by_id(TARGET_ID) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => {
            debug!("no projects preview here, falling back to {FALLBACK_HREF}");
            let _ = window.location().set_href(FALLBACK_HREF);
        }
    }
}
