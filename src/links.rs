//! Same-origin link interception.
//!
//! One document-level click listener decides per click whether the browser's
//! native navigation runs or the page fades out first. The decision itself is
//! a pure function over the anchor's raw `href` attribute, its `target`
//! property and the current page URL, so every rule is testable without a
//! DOM. Anything that cannot be resolved fails open to native navigation.

use std::rc::Rc;

use log::debug;
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlAnchorElement};

use crate::transition::PageTransition;

/// What a document-level click on an anchor should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Leave the click alone; the browser handles it.
    Native,
    /// Suppress the click, fade out, then navigate to this resolved URL.
    Intercept(String),
}

/// Decides whether a clicked anchor qualifies for the fade transition.
///
/// A link is intercepted only when all of the following hold: it has a
/// non-empty `href` that is neither a `mailto:` link nor a same-page
/// fragment, the href resolves to the same origin (scheme, host and port) as
/// `page_url`, and the anchor does not open a new tab via `target="_blank"`.
///
/// Resolution uses the WHATWG URL algorithm, so relative, absolute and
/// protocol-relative hrefs behave exactly as the browser would resolve them.
/// Hrefs with non-hierarchical schemes (`javascript:`, `data:`) produce
/// opaque origins and therefore never compare equal to an http(s) page.
/// Unparsable input classifies as [`LinkAction::Native`].
pub fn classify(href: Option<&str>, target: &str, page_url: &str) -> LinkAction {
    let Some(href) = href else {
        return LinkAction::Native;
    };
    if href.is_empty() || href.starts_with("mailto:") || href.starts_with('#') {
        return LinkAction::Native;
    }
    let Ok(page) = Url::parse(page_url) else {
        return LinkAction::Native;
    };
    let Ok(resolved) = page.join(href) else {
        return LinkAction::Native;
    };
    if resolved.origin() != page.origin() {
        return LinkAction::Native;
    }
    if target == "_blank" {
        return LinkAction::Native;
    }
    LinkAction::Intercept(resolved.to_string())
}

/// Installs the document-level click listener.
///
/// The listener lives for the rest of the page's life, so its closure is
/// leaked deliberately.
pub fn install(document: &Document, transition: Rc<PageTransition>) -> Result<(), JsValue> {
    let handler = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(element) = target.dyn_ref::<Element>() else {
            return;
        };
        let Ok(Some(candidate)) = element.closest("a") else {
            return;
        };
        let Ok(anchor) = candidate.dyn_into::<HtmlAnchorElement>() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(page_url) = window.location().href() else {
            return;
        };
        let href = anchor.get_attribute("href");
        match classify(href.as_deref(), &anchor.target(), &page_url) {
            LinkAction::Native => {}
            LinkAction::Intercept(destination) => {
                event.prevent_default();
                if !transition.begin_exit(&destination) {
                    // Keep the browser from racing the scheduled navigation,
                    // but schedule nothing new.
                    debug!("navigation already in flight, ignoring click on {destination}");
                }
            }
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    debug!("internal link interception armed");
    Ok(())
}
