//! Cross-page fade transitions.
//!
//! The document is always in exactly one [`TransitionPhase`], owned by a
//! single [`PageTransition`] controller. The stylesheet keys its enter/exit
//! animations on body classes that are derived from phase changes here and
//! nowhere else. A page reload resets everything; no phase ever needs to be
//! unwound.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlElement;

/// Milliseconds between a qualifying click and the actual navigation.
///
/// Matches the fade-out duration in the stylesheet; the two must change
/// together.
pub const NAV_DELAY_MS: u32 = 280;

const ENTER_CLASS: &str = "page-enter-active";
const EXIT_CLASS: &str = "page-exit-active";

/// Where the document is in its visual lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Freshly loaded, no animation requested yet.
    Idle,
    /// The enter animation has been started.
    Entering,
    /// A deferred navigation is in flight; the exit animation is playing.
    Exiting,
}

impl TransitionPhase {
    /// Phase after starting the enter animation, or `None` when it already ran.
    fn on_enter(self) -> Option<Self> {
        match self {
            TransitionPhase::Idle => Some(TransitionPhase::Entering),
            TransitionPhase::Entering | TransitionPhase::Exiting => None,
        }
    }

    /// Phase after requesting an exit, or `None` when one is already in flight.
    fn on_exit(self) -> Option<Self> {
        match self {
            TransitionPhase::Idle | TransitionPhase::Entering => Some(TransitionPhase::Exiting),
            TransitionPhase::Exiting => None,
        }
    }
}

/// Sole owner of the document's transition phase.
pub struct PageTransition {
    phase: Cell<TransitionPhase>,
    body: HtmlElement,
}

impl PageTransition {
    pub fn new(body: HtmlElement) -> Self {
        Self {
            phase: Cell::new(TransitionPhase::Idle),
            body,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase.get()
    }

    /// Starts the enter animation. Returns `false` when it already ran.
    pub fn begin_enter(&self) -> bool {
        let Some(next) = self.phase.get().on_enter() else {
            return false;
        };
        self.phase.set(next);
        let _ = self.body.class_list().add_1(ENTER_CLASS);
        true
    }

    /// Starts the exit animation and schedules navigation to `href` after
    /// [`NAV_DELAY_MS`].
    ///
    /// Returns `false` without scheduling anything when a navigation is
    /// already in flight: the first qualifying click wins until the page
    /// unloads. The timer is fire-and-forget; nothing cancels it because the
    /// navigation it performs discards the whole document.
    pub fn begin_exit(&self, href: &str) -> bool {
        let Some(next) = self.phase.get().on_exit() else {
            return false;
        };
        self.phase.set(next);
        let _ = self.body.class_list().add_1(EXIT_CLASS);
        debug!("fading out, navigating to {href} in {NAV_DELAY_MS}ms");
        let destination = href.to_owned();
        Timeout::new(NAV_DELAY_MS, move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&destination);
            }
        })
        .forget();
        true
    }
}
