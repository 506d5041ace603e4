//! The full-viewport curtain shown while a page transition runs.
//!
//! The curtain is a single `div` keyed by [`OVERLAY_ID`]. Insertion replaces
//! any stale instance and removal tolerates an already-missing node, so
//! overlapping transitions share one element instead of stacking. Its
//! stylesheet is injected once per document, keyed by
//! [`TRANSITION_STYLE_ID`].

/// Element id of the curtain node. At most one element carries this id.
pub const OVERLAY_ID: &str = "page-transition-slide-right";

/// Element id of the injected stylesheet.
pub const TRANSITION_STYLE_ID: &str = "page-transition-slide-right-style";

const OVERLAY_CLASS: &str = "page-transition-slide-right";

const OVERLAY_STYLE: &str = "background: #fff; animation-duration: 0.7s; \
    animation-timing-function: cubic-bezier(0.77, 0, 0.175, 1); \
    display: flex; align-items: center; justify-content: center; \
    overflow: hidden; position: fixed; inset: 0; z-index: 9999;";

// Curved right edge plus the centered logo. The path bows the edge toward
// the viewport center so the slide-in reads as a curtain, not a flat wipe.
const OVERLAY_MARKUP: &str = r##"<svg width="18vw" height="100%" viewBox="0 0 18 100" preserveAspectRatio="none" style="position: absolute; right: 0; top: 0; width: 18vw; height: 100%; pointer-events: none; z-index: 10001;"><path d="M18,0 Q0,50 18,100 L18,100 L18,0 Z" fill="#fff"></path></svg><img src="/svg/AVASA.svg" alt="Page Transition Symbol" style="width: 80px; height: 80px; object-fit: contain; display: block; z-index: 10002;">"##;

const TRANSITION_CSS: &str = r#"
.page-transition-slide-right {
    position: fixed;
    inset: 0;
    z-index: 9999;
    background: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    animation-name: slideInFromRightCurved;
    animation-duration: 0.7s;
    animation-timing-function: cubic-bezier(0.77, 0, 0.175, 1);
    animation-fill-mode: forwards;
}

@keyframes slideInFromRightCurved {
    0% {
        transform: translateX(100%);
        opacity: 1;
    }
    100% {
        transform: translateX(0%);
        opacity: 1;
    }
}
"#;

/// Surface the transition sequence paints on.
///
/// [`PageOverlay`] talks to the live document; tests substitute recording
/// implementations to observe the sequence.
pub trait OverlaySurface {
    /// Inserts the curtain, replacing any stale instance first.
    fn show(&self);

    /// Removes the curtain if it is present.
    fn clear(&self);
}

/// [`OverlaySurface`] backed by the real browser document.
///
/// Every operation is a no-op outside the browser.
#[derive(Clone, Copy, Default)]
pub struct PageOverlay;

impl OverlaySurface for PageOverlay {
    fn show(&self) {
        mount_overlay();
    }

    fn clear(&self) {
        clear_overlay();
    }
}

/// Injects the curtain's stylesheet if the document does not carry it yet.
pub fn ensure_transition_style() {
    ensure_stylesheet(TRANSITION_STYLE_ID, TRANSITION_CSS);
}

/// Appends a `<style>` element to the document head, keyed by element id.
///
/// Safe to call on every render: later calls find the element and return.
/// Outside the browser this is a no-op.
pub fn ensure_stylesheet(id: &str, css: &str) {
    #[cfg(target_arch = "wasm32")]
    dom::ensure_stylesheet(id, css);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, css);
}

fn mount_overlay() {
    #[cfg(target_arch = "wasm32")]
    dom::mount_overlay();
}

fn clear_overlay() {
    #[cfg(target_arch = "wasm32")]
    dom::clear_overlay();
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{OVERLAY_CLASS, OVERLAY_ID, OVERLAY_MARKUP, OVERLAY_STYLE};

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub(super) fn mount_overlay() {
        let Some(document) = document() else {
            return;
        };
        if let Some(stale) = document.get_element_by_id(OVERLAY_ID) {
            stale.remove();
        }
        let Ok(overlay) = document.create_element("div") else {
            return;
        };
        overlay.set_id(OVERLAY_ID);
        overlay.set_class_name(OVERLAY_CLASS);
        let _ = overlay.set_attribute("style", OVERLAY_STYLE);
        overlay.set_inner_html(OVERLAY_MARKUP);
        if let Some(body) = document.body() {
            let _ = body.append_child(&overlay);
        }
    }

    pub(super) fn clear_overlay() {
        let Some(document) = document() else {
            return;
        };
        if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
            overlay.remove();
        }
    }

    pub(super) fn ensure_stylesheet(id: &str, css: &str) {
        let Some(document) = document() else {
            return;
        };
        if document.get_element_by_id(id).is_some() {
            return;
        }
        let Ok(style) = document.create_element("style") else {
            return;
        };
        style.set_id(id);
        style.set_inner_html(css);
        if let Some(head) = document.head() {
            let _ = head.append_child(&style);
        }
    }
}
