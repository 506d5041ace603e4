//! A link that plays the page-transition curtain before navigating.

use std::rc::Rc;

use avasa_transition::{
    ensure_transition_style, resolve_href, NavigationRequest, PageTransition, ViewportScroller,
};
use dioxus_history::History;
use dioxus_lib::prelude::dioxus_core::AttributeValue;
use dioxus_lib::prelude::*;

use crate::escape::escape_quotes;

/// Props for [`TransitionLink`].
#[derive(Clone, Props, PartialEq)]
pub struct TransitionLinkProps {
    /// Requested destination. The rendered href stays on this raw value
    /// until the first client-side settle, then swaps to the rewritten one.
    #[props(into)]
    pub href: ReadOnlySignal<String>,

    /// About-page anchor override, honored only when `href` is `"/"` and the
    /// value names a known section anchor. Never forwarded to the DOM.
    pub aboutus_anchor: Option<String>,

    /// Attributes forwarded to the underlying anchor element. Text values
    /// are quote-escaped before they render.
    #[props(extends = a, extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,

    /// Link content.
    pub children: Element,
}

/// A drop-in `a` element gated behind the page transition.
///
/// On a plain primary-button click it suppresses the native follow, plays
/// the curtain sequence and pushes the rewritten destination to the
/// [`History`] provider found in context. A [`ViewportScroller`] in context
/// opts the link into the scripted scroll-to-top that precedes the curtain.
/// Modified clicks, non-primary buttons and external destinations keep their
/// native behavior, as does every click when no history provider exists.
#[component]
pub fn TransitionLink(props: TransitionLinkProps) -> Element {
    let TransitionLinkProps {
        href,
        aboutus_anchor,
        attributes,
        children,
    } = props;

    let mut resolved = use_signal(|| None::<String>);
    let history = use_hook(try_consume_context::<Rc<dyn History>>);
    let scroller = use_hook(try_consume_context::<Rc<dyn ViewportScroller>>);

    use_effect(|| ensure_transition_style());

    // Resolution is deferred to the client so server markup and the first
    // client frame agree on the raw href.
    let anchor = aboutus_anchor.clone();
    use_effect(move || {
        resolved.set(Some(resolve_href(&href.read(), anchor.as_deref())));
    });

    let attributes: Vec<Attribute> = attributes
        .into_iter()
        .map(|mut attribute| {
            if let AttributeValue::Text(text) = &attribute.value {
                attribute.value = AttributeValue::Text(escape_quotes(text));
            }
            attribute
        })
        .collect();

    let onclick = move |event: Event<MouseData>| {
        let target = match &*resolved.peek() {
            Some(target) => target.clone(),
            None => resolve_href(&href.peek(), aboutus_anchor.as_deref()),
        };
        let request = NavigationRequest {
            target,
            button: event.trigger_button(),
            modifiers: event.modifiers(),
            default_prevented: false,
        };
        if !request.should_intercept() {
            return;
        }
        let Some(history) = history.clone() else {
            tracing::warn!(
                "TransitionLink to {} has no history provider, falling back to native navigation",
                request.target
            );
            return;
        };
        event.prevent_default();

        let mut transition = PageTransition::new(history);
        if let Some(scroller) = scroller.clone() {
            transition = transition.with_scroller(scroller);
        }
        let _ = spawn_forever(transition.run(request.target));
    };

    let rendered_href = match resolved() {
        Some(target) => target,
        None => href(),
    };

    rsx! {
        a {
            href: "{rendered_href}",
            onclick,
            ..attributes,
            {children}
        }
    }
}
