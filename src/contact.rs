//! Client-side contact form validation.
//!
//! Submission never leaves the page: the handler validates, flags fields and
//! notifies the user, then resets the form on simulated success. Wiring a
//! real delivery backend replaces only the success branch.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

const FORM_SELECTOR: &str = "form#contact-form";
const INVALID_CLASS: &str = "invalid";

/// Minimum message length after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

const INVALID_NOTICE: &str =
    "Please complete the form correctly. Make sure email is valid and message is at least 10 characters.";
const SUCCESS_NOTICE: &str =
    "Thanks! Your message has been composed (demo). To enable real sending, integrate a backend or service like EmailJS.";

/// Minimal shape check: non-whitespace, `@`, non-whitespace, `.`,
/// non-whitespace, anchored. Deliverability is the backend's problem.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// Per-field validity for one submission attempt. Recomputed from scratch on
/// every attempt; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReport {
    pub name_ok: bool,
    pub email_ok: bool,
    pub message_ok: bool,
}

impl FieldReport {
    pub fn all_ok(&self) -> bool {
        self.name_ok && self.email_ok && self.message_ok
    }
}

/// Checks all three fields independently, never short-circuiting, so every
/// invalid field can be flagged at once. The email value is checked untrimmed:
/// stray whitespace makes it invalid.
pub fn validate(name: &str, email: &str, message: &str) -> FieldReport {
    FieldReport {
        name_ok: !name.trim().is_empty(),
        email_ok: EMAIL_SHAPE.is_match(email),
        message_ok: message.trim().chars().count() >= MIN_MESSAGE_CHARS,
    }
}

/// Arms the contact form when the page has one.
///
/// A page without the form, or a form missing one of its named fields, leaves
/// native submission untouched rather than faulting mid-submit.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let Ok(Some(found)) = document.query_selector(FORM_SELECTOR) else {
        debug!("no contact form on this page");
        return Ok(());
    };
    let Ok(form) = found.dyn_into::<HtmlFormElement>() else {
        return Ok(());
    };
    let Some(name) = field::<HtmlInputElement>(&form, "input[name=name]") else {
        warn!("contact form has no name field, leaving it alone");
        return Ok(());
    };
    let Some(email) = field::<HtmlInputElement>(&form, "input[name=email]") else {
        warn!("contact form has no email field, leaving it alone");
        return Ok(());
    };
    let Some(message) = field::<HtmlTextAreaElement>(&form, "textarea[name=message]") else {
        warn!("contact form has no message field, leaving it alone");
        return Ok(());
    };

    let form_in_handler = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        submit(&form_in_handler, &name, &email, &message);
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    debug!("contact form validation armed");
    Ok(())
}

fn field<T: JsCast>(form: &HtmlFormElement, selector: &str) -> Option<T> {
    form.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn submit(
    form: &HtmlFormElement,
    name: &HtmlInputElement,
    email: &HtmlInputElement,
    message: &HtmlTextAreaElement,
) {
    let _ = name.class_list().remove_1(INVALID_CLASS);
    let _ = email.class_list().remove_1(INVALID_CLASS);
    let _ = message.class_list().remove_1(INVALID_CLASS);

    let report = validate(&name.value(), &email.value(), &message.value());
    if !report.name_ok {
        let _ = name.class_list().add_1(INVALID_CLASS);
    }
    if !report.email_ok {
        let _ = email.class_list().add_1(INVALID_CLASS);
    }
    if !report.message_ok {
        let _ = message.class_list().add_1(INVALID_CLASS);
    }

    if !report.all_ok() {
        alert(INVALID_NOTICE);
        return;
    }

    // No network call: composing is simulated until a backend exists.
    alert(SUCCESS_NOTICE);
    form.reset();
}

fn alert(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(text);
    }
}
