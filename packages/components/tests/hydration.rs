#![allow(unused, non_upper_case_globals, non_snake_case)]
#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use avasa_components::TransitionLink;
use dioxus_core::NoOpMutations;
use dioxus_lib::prelude::*;

fn render(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

/// Lets queued effects run and applies the renders they trigger.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..2 {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[tokio::test]
async fn the_first_render_keeps_the_raw_href() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/ourwork", "Our Work" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    let markup = render(&dom);
    assert!(markup.contains(r#"href="/ourwork""#), "got: {markup}");
    assert!(markup.contains("Our Work"));
}

#[tokio::test]
async fn the_destination_swaps_after_the_client_settles() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/ourwork", "Our Work" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(render(&dom).contains(r#"href="/ourwork""#));

    settle(&mut dom).await;

    let markup = render(&dom);
    assert!(markup.contains(r#"href="/""#), "got: {markup}");
    assert!(!markup.contains("/ourwork"));
    assert!(markup.contains("Our Work"));
}

#[tokio::test]
async fn untouched_destinations_survive_the_swap() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/donate", "Donate" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    assert!(render(&dom).contains(r#"href="/donate""#));
}

#[tokio::test]
async fn an_anchor_override_swaps_a_home_link() {
    fn app() -> Element {
        rsx! {
            TransitionLink {
                href: "/",
                aboutus_anchor: "aboutus/#meet-our-team",
                "Our Team"
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(render(&dom).contains(r#"href="/""#));

    settle(&mut dom).await;

    let markup = render(&dom);
    assert!(markup.contains(r#"href="aboutus/#meet-our-team""#), "got: {markup}");
}

#[tokio::test]
async fn an_unknown_anchor_override_is_ignored() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/", aboutus_anchor: "aboutus/#history", "About" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    let markup = render(&dom);
    assert!(markup.contains(r#"href="/""#), "got: {markup}");
    assert!(!markup.contains("aboutus/#history"));
}

#[tokio::test]
async fn forwarded_text_attributes_are_quote_escaped() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/", title: r#"Say "hi""#, "Home" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    let markup = render(&dom);
    assert!(markup.contains("quot;"), "got: {markup}");
    assert!(!markup.contains(r#"Say "hi""#));
}

#[tokio::test]
async fn forwarded_attributes_reach_the_anchor() {
    fn app() -> Element {
        rsx! {
            TransitionLink { href: "/donate", class: "nav-link", id: "donate-link", "Donate" }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    let markup = render(&dom);
    assert!(markup.contains("nav-link"), "got: {markup}");
    assert!(markup.contains("donate-link"));
    assert!(markup.contains("<a"));
}
