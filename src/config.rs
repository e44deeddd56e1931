//! Per-page feature activation.
//!
//! Each page declares which behaviors it wants via a JSON object on the body
//! tag; everything defaults to on, so a page that declares nothing behaves
//! like every other page. Whether a feature *can* run (its elements exist) is
//! a separate, per-feature concern.

use log::warn;
use serde::Deserialize;
use web_sys::HtmlElement;

/// Body attribute holding the JSON capability object, e.g.
/// `<body data-capabilities='{"intro_overlay": false}'>`.
pub const CAPABILITIES_ATTR: &str = "data-capabilities";

/// The set of behaviors a page opts into. Missing keys fall back to the
/// defaults, so partial objects only switch off what they name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageCapabilities {
    pub transitions: bool,
    pub intro_overlay: bool,
    pub menu: bool,
    pub scroll_helper: bool,
    pub contact_form: bool,
}

impl Default for PageCapabilities {
    fn default() -> Self {
        Self {
            transitions: true,
            intro_overlay: true,
            menu: true,
            scroll_helper: true,
            contact_form: true,
        }
    }
}

impl PageCapabilities {
    /// Parses the attribute value. `None` (attribute absent) and malformed
    /// JSON both yield the defaults; malformed JSON additionally logs what
    /// was wrong.
    pub fn parse(attr: Option<&str>) -> Self {
        let Some(raw) = attr else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(capabilities) => capabilities,
            Err(err) => {
                warn!("malformed {CAPABILITIES_ATTR} attribute ({err}), enabling everything");
                Self::default()
            }
        }
    }

    /// Reads the capability set off the body tag.
    pub fn from_body(body: &HtmlElement) -> Self {
        Self::parse(body.get_attribute(CAPABILITIES_ATTR).as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attribute_enables_everything() {
        assert_eq!(PageCapabilities::parse(None), PageCapabilities::default());
    }

    #[test]
    fn test_empty_object_enables_everything() {
        assert_eq!(
            PageCapabilities::parse(Some("{}")),
            PageCapabilities::default()
        );
    }

    #[test]
    fn test_partial_object_merges_over_defaults() {
        let capabilities = PageCapabilities::parse(Some(r#"{"intro_overlay": false}"#));
        assert!(!capabilities.intro_overlay);
        assert!(capabilities.transitions);
        assert!(capabilities.menu);
        assert!(capabilities.scroll_helper);
        assert!(capabilities.contact_form);
    }

    #[test]
    fn test_full_object_is_honored() {
        let capabilities = PageCapabilities::parse(Some(
            r#"{"transitions": false, "intro_overlay": false, "menu": false,
                "scroll_helper": false, "contact_form": false}"#,
        ));
        assert_eq!(
            capabilities,
            PageCapabilities {
                transitions: false,
                intro_overlay: false,
                menu: false,
                scroll_helper: false,
                contact_form: false,
            }
        );
    }

    #[test]
    fn test_malformed_json_fails_open() {
        assert_eq!(
            PageCapabilities::parse(Some("overlay? never heard of it")),
            PageCapabilities::default()
        );
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let capabilities = PageCapabilities::parse(Some(r#"{"menu": false, "confetti": true}"#));
        assert!(!capabilities.menu);
        assert!(capabilities.transitions);
    }
}
