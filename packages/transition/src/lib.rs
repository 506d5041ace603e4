#![doc = include_str!("../README.md")]

mod easing;
mod overlay;
mod request;
mod rewrite;
mod scroll;
pub mod timing;
mod transition;

pub use easing::ease_out_cubic;
pub use overlay::{
    ensure_stylesheet, ensure_transition_style, OverlaySurface, PageOverlay, OVERLAY_ID,
    TRANSITION_STYLE_ID,
};
pub use request::{is_external, NavigationRequest};
pub use rewrite::{resolve_href, rewrite_href, ABOUT_ANCHORS};
pub use scroll::{ViewportScroller, WindowScroller};
pub use transition::PageTransition;
