//! Classification of link activations.

use dioxus_html::input_data::MouseButton;
use keyboard_types::Modifiers;

/// A single link activation, captured at the moment of the click.
///
/// [`should_intercept`](Self::should_intercept) decides whether the
/// transition sequence claims the activation or the browser's native follow
/// proceeds untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    /// Destination the activation resolves to.
    pub target: String,
    /// Mouse button that triggered the event, when one did.
    pub button: Option<MouseButton>,
    /// Modifier keys held during the activation.
    pub modifiers: Modifiers,
    /// Whether an earlier handler already claimed the event.
    pub default_prevented: bool,
}

impl NavigationRequest {
    const BLOCKING_MODIFIERS: Modifiers = Modifiers::META
        .union(Modifiers::ALT)
        .union(Modifiers::CONTROL)
        .union(Modifiers::SHIFT);

    /// True when the transition sequence should take over this activation.
    ///
    /// Prevented events, non-primary buttons, held modifiers (open-in-new-tab
    /// and friends) and external destinations all fall through to the
    /// browser.
    pub fn should_intercept(&self) -> bool {
        !self.default_prevented
            && self.button == Some(MouseButton::Primary)
            && !self.modifiers.intersects(Self::BLOCKING_MODIFIERS)
            && !is_external(&self.target)
    }
}

/// Destinations the client-side router must never handle.
pub fn is_external(target: &str) -> bool {
    target.starts_with("http") || target.starts_with("mailto:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_click(target: &str) -> NavigationRequest {
        NavigationRequest {
            target: target.to_string(),
            button: Some(MouseButton::Primary),
            modifiers: Modifiers::empty(),
            default_prevented: false,
        }
    }

    #[test]
    fn plain_primary_click_is_intercepted() {
        assert!(plain_click("/ourwork").should_intercept());
        assert!(plain_click("aboutus/#who-we-are").should_intercept());
    }

    #[test]
    fn external_destinations_fall_through() {
        assert!(!plain_click("http://example.com").should_intercept());
        assert!(!plain_click("https://example.com/page").should_intercept());
        assert!(!plain_click("mailto:hello@avasafoundation.org").should_intercept());
    }

    #[test]
    fn each_blocking_modifier_falls_through() {
        for modifier in [
            Modifiers::META,
            Modifiers::ALT,
            Modifiers::CONTROL,
            Modifiers::SHIFT,
        ] {
            let mut request = plain_click("/");
            request.modifiers = modifier;
            assert!(!request.should_intercept(), "{modifier:?} should block");
        }
    }

    #[test]
    fn lock_keys_do_not_block() {
        let mut request = plain_click("/");
        request.modifiers = Modifiers::CAPS_LOCK;
        assert!(request.should_intercept());
    }

    #[test]
    fn non_primary_buttons_fall_through() {
        let mut request = plain_click("/");
        request.button = Some(MouseButton::Auxiliary);
        assert!(!request.should_intercept());
        request.button = Some(MouseButton::Secondary);
        assert!(!request.should_intercept());
        request.button = None;
        assert!(!request.should_intercept());
    }

    #[test]
    fn prevented_events_fall_through() {
        let mut request = plain_click("/");
        request.default_prevented = true;
        assert!(!request.should_intercept());
    }
}
