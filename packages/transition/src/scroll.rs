//! Scroll-to-top collaborator used while a transition starts.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Animated control over the viewport scroll position.
///
/// The transition sequence treats this as optional. Pages provide an
/// implementation through context when they want the scripted scroll; its
/// absence skips that step and the sequence moves straight to the overlay.
pub trait ViewportScroller {
    /// Scrolls the window to the document origin over `duration`.
    fn scroll_to_top(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + '_>>;
}

/// [`ViewportScroller`] backed by the real browser window.
///
/// Runs an eased animation-frame loop. Outside the browser, or when the
/// window is already at the origin, it resolves immediately.
#[derive(Clone, Copy, Default)]
pub struct WindowScroller;

impl ViewportScroller for WindowScroller {
    fn scroll_to_top(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + '_>> {
        Box::pin(scroll_window_to_top(duration))
    }
}

#[cfg(target_arch = "wasm32")]
async fn scroll_window_to_top(duration: Duration) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let from = window.scroll_y().unwrap_or_default();
    if from <= 0.0 {
        return;
    }
    let total = duration.as_secs_f64() * 1000.0;
    let start = next_frame().await;
    loop {
        let elapsed = next_frame().await - start;
        let t = if total > 0.0 {
            (elapsed / total).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = crate::easing::ease_out_cubic(t);
        window.scroll_to_with_x_and_y(0.0, from * (1.0 - eased));
        if t >= 1.0 {
            break;
        }
    }
}

/// Resolves on the next animation frame with its timestamp.
#[cfg(target_arch = "wasm32")]
async fn next_frame() -> f64 {
    let (sender, receiver) = futures_channel::oneshot::channel();
    // The handle cancels the frame on drop, so it must outlive the await.
    let _frame = gloo::render::request_animation_frame(move |timestamp| {
        let _ = sender.send(timestamp);
    });
    receiver.await.unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn scroll_window_to_top(_duration: Duration) {}
