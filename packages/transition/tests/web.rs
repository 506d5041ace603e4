#![cfg(target_arch = "wasm32")]

use avasa_transition::{
    ensure_transition_style, OverlaySurface, PageOverlay, OVERLAY_ID, TRANSITION_STYLE_ID,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn matches(selector: &str) -> u32 {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector_all(selector)
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
fn the_curtain_is_a_singleton() {
    let overlay = PageOverlay;
    let selector = format!("#{OVERLAY_ID}");

    overlay.show();
    overlay.show();
    overlay.show();
    assert_eq!(matches(&selector), 1);

    overlay.clear();
    assert_eq!(matches(&selector), 0);

    // Clearing an absent curtain is a no-op.
    overlay.clear();
    assert_eq!(matches(&selector), 0);
}

#[wasm_bindgen_test]
fn the_stylesheet_is_injected_once() {
    ensure_transition_style();
    ensure_transition_style();
    ensure_transition_style();
    assert_eq!(matches(&format!("style#{TRANSITION_STYLE_ID}")), 1);
}
