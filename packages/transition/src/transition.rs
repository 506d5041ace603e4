//! The scripted activation sequence behind a transition link.

use std::rc::Rc;

use dioxus_history::History;

use crate::overlay::{OverlaySurface, PageOverlay};
use crate::scroll::ViewportScroller;
use crate::timing::{self, CLEANUP_DELAY, NAVIGATION_HOLD, SCROLL_DURATION, SCROLL_SETTLE};

/// One full transition choreography, from click to lifted curtain.
///
/// The sequence is: an optional eased scroll to the origin plus a short
/// settle, curtain in, a hold that covers the slide-in animation, the route
/// push, and a delayed curtain removal. Each activation builds and runs its
/// own `PageTransition`; overlapping runs stay safe because the curtain
/// insert replaces stale nodes and removal is idempotent.
pub struct PageTransition {
    history: Rc<dyn History>,
    scroller: Option<Rc<dyn ViewportScroller>>,
    overlay: Rc<dyn OverlaySurface>,
}

impl PageTransition {
    /// Creates a transition that navigates through `history` and paints on
    /// the live document.
    pub fn new(history: Rc<dyn History>) -> Self {
        Self {
            history,
            scroller: None,
            overlay: Rc::new(PageOverlay),
        }
    }

    /// Adds the smooth-scroll collaborator.
    pub fn with_scroller(mut self, scroller: Rc<dyn ViewportScroller>) -> Self {
        self.scroller = Some(scroller);
        self
    }

    /// Replaces the curtain surface. Tests use this to observe the sequence.
    pub fn with_overlay(mut self, overlay: Rc<dyn OverlaySurface>) -> Self {
        self.overlay = overlay;
        self
    }

    /// Plays the sequence and navigates to `target`.
    ///
    /// Meant to run as a detached task: the curtain removal is the tail of
    /// this future, well after the route change the user is waiting on.
    pub async fn run(self, target: String) {
        tracing::trace!("starting page transition to {target}");

        if let Some(scroller) = &self.scroller {
            scroller.scroll_to_top(SCROLL_DURATION).await;
            timing::sleep(SCROLL_SETTLE).await;
        }

        self.overlay.show();
        timing::sleep(NAVIGATION_HOLD).await;

        self.history.push(target);

        timing::sleep(CLEANUP_DELAY).await;
        self.overlay.clear();
    }
}
