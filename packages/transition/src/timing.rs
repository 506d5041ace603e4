//! Fixed delays of the transition sequence.
//!
//! The numbers are tuned as a set: the navigation hold is slightly shorter
//! than the overlay's slide-in so the route swaps while the curtain still
//! covers the viewport, and the cleanup delay gives the next page a beat to
//! paint underneath before the curtain lifts.

use std::time::Duration;

/// Animated scroll back to the document origin.
pub const SCROLL_DURATION: Duration = Duration::from_millis(500);

/// Pause after the scroll so layout settles before the overlay appears.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(20);

/// Length of the overlay's slide-in animation.
pub const OVERLAY_ENTER: Duration = Duration::from_millis(700);

/// Time the overlay stays up before the route change.
pub const NAVIGATION_HOLD: Duration = Duration::from_millis(650);

/// Delay between the route change and overlay removal.
pub const CLEANUP_DELAY: Duration = Duration::from_millis(500);

/// Suspends the current task for `duration`.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_happens_under_a_covering_overlay() {
        assert!(NAVIGATION_HOLD < OVERLAY_ENTER);
    }
}
