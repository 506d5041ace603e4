//! The "OUR JOURNEY" timeline section.
//!
//! One entry per year, a scroll-linked beam that fills the rail as the
//! visitor reads, and a small per-entry image gallery whose enter animation
//! is picked at random on every step.

use std::cell::RefCell;
use std::rc::Rc;

use avasa_transition::ensure_stylesheet;
use dioxus_lib::prelude::*;

/// One year of the foundation's history.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub images: &'static [&'static str],
    pub content: &'static str,
}

/// The default journey shown when no entries are passed in.
pub const JOURNEY: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2022",
        title: "The Beginning of Avasa",
        images: &[
            "https://w0.peakpx.com/wallpaper/571/269/HD-wallpaper-a-silent-voice-anime-goals-koe-no-katachi-love-random.jpg",
            "https://w0.peakpx.com/wallpaper/513/42/HD-wallpaper-tenki-no-ko-anime-art-random-sky-waifu.jpg",
            "https://w0.peakpx.com/wallpaper/894/73/HD-wallpaper-tenki-no-ko-anime-art-goals-random-waifu.jpg",
        ],
        content: "Avasa was founded by Radha Priyanka in Hyderabad with a vision to support the underprivileged. The year saw heartfelt initiatives like clothes donation drives, online awareness sessions on self-confidence, interactions with orphanages, and food distribution for the needy — laying the foundation for a mission rooted in compassion.",
    },
    TimelineEntry {
        year: "2023",
        title: " A New Chapter in Jaipur",
        images: &[
            "https://w0.peakpx.com/wallpaper/894/73/HD-wallpaper-tenki-no-ko-anime-art-goals-random-waifu.jpg",
            "https://w0.peakpx.com/wallpaper/733/129/HD-wallpaper-kimetsu-no-yaiba-anime-art-demon-slayer-fantasy-random.jpg",
        ],
        content: "In 2023, Avasa was reborn in Jaipur with renewed energy. Radha, joined by her university friends and volunteers, expanded outreach through meaningful interactions with Naya Sawera Orphanage and Sarthak Old Age Home.The team conducted dance classes and bonding sessions with children at Matra Chaya Bal Gruh and connected deeply with residents of a nearby village, Chak, understanding their everyday struggles.Efforts included distributing food and warm clothes to those in need, and engaging with students at the government school in Chak, bringing care, creativity, and community to life through every initiative.",
    },
    TimelineEntry {
        year: "2024",
        title: "A Year of Recognition & Formal Milestone",
        images: &[
            "https://w0.peakpx.com/wallpaper/514/165/HD-wallpaper-a-silent-voice-anime-girl-goals-koe-no-katachi-love-random-waifu.jpg",
            "https://w0.peakpx.com/wallpaper/891/288/HD-wallpaper-silent-voice-anime-art-koe-no-katachi-love-random.jpg",
        ],
        content: "In 2024, Avasa Foundation was officially registered under the Telangana Societies Registration Act (Reg. No. 1108 of 2024), marking a major step in our organizational journey.We celebrated New Year’s with both an orphanage and an old age home, and were honored to be invited by the Chak Government School for their Republic Day and Annual Day celebrations, where we distributed stationery kits and continued regular student engagement.Our ongoing association with Sarthak Old Age Home strengthened, while our Beat the Heat drive distributed 1,000 buttermilk packets across underserved areas.Other initiatives included food donation with Naya Sawera NGO, period kits for women in Chak village, and medical kit distribution in Vaishali Nagar slums — reinforcing our commitment to community wellness and dignity.",
    },
    TimelineEntry {
        year: "2025",
        title: "Innovation, Expansion & Continued Commitment",
        images: &[
            "https://w0.peakpx.com/wallpaper/41/192/HD-wallpaper-silent-voice-anime-koe-no-kstschi-love-random.jpg",
            "https://w0.peakpx.com/wallpaper/1009/985/HD-wallpaper-chuunibyou-anime-art-beatiful-girl-random-waifu.jpg",
        ],
        content: "In 2025, Avasa Foundation continued its mission with renewed energy and innovation.We were honored once again to join the Republic Day celebrations at Chak Government School, where we strengthened our commitment to education by providing a projector, offering much-needed technical support to enhance classroom learning.Building on the success of the previous year, our summer Beat the Heat drive returned with greater scale — distributing over 1,500 buttermilk packets to individuals battling the harsh summer heat across underserved areas.With every initiative, Avasa continues to evolve — combining compassion, community, and sustainable support to uplift lives across generations.",
    },
];

const TRACK_ID: &str = "avasa-journey-track";
const TIMELINE_STYLE_ID: &str = "avasa-journey-style";

/// Number of gallery enter animations defined in the stylesheet.
const ENTER_VARIANTS: usize = 5;

/// Progress of the viewport through the tracked section.
///
/// 0 when the track's top reaches 10% of the viewport height, 1 when its
/// bottom reaches 50%. Tracks shorter than that window snap to the nearest
/// edge.
fn scroll_progress(viewport: f64, top: f64, height: f64) -> f64 {
    let start = 0.1 * viewport;
    let travel = height - 0.4 * viewport;
    if travel <= 0.0 {
        return if top <= start { 1.0 } else { 0.0 };
    }
    ((start - top) / travel).clamp(0.0, 1.0)
}

/// The beam fades in over the first tenth of the scroll range.
fn beam_opacity(progress: f64) -> f64 {
    (progress / 0.1).clamp(0.0, 1.0)
}

fn next_index(current: usize, count: usize) -> usize {
    (current + 1) % count
}

fn prev_index(current: usize, count: usize) -> usize {
    (current + count - 1) % count
}

/// The leading image is the entry's icon, the rest are numbered from one.
fn image_alt(title: &str, index: usize) -> String {
    if index == 0 {
        format!("{title} icon")
    } else {
        format!("{title} image {}", index + 1)
    }
}

#[cfg(target_arch = "wasm32")]
fn random_variant() -> usize {
    (js_sys::Math::random() * ENTER_VARIANTS as f64) as usize % ENTER_VARIANTS
}

/// Server and native renders stay on the first variant so markup is
/// deterministic.
#[cfg(not(target_arch = "wasm32"))]
fn random_variant() -> usize {
    0
}

#[cfg(target_arch = "wasm32")]
type ScrollListener = gloo::events::EventListener;
#[cfg(not(target_arch = "wasm32"))]
type ScrollListener = ();

/// Follows window scroll and feeds [`scroll_progress`] into `progress`.
///
/// The listener detaches when the slot drops with the component. Outside the
/// browser this is a no-op and the beam stays at rest.
fn watch_scroll(slot: &Rc<RefCell<Option<ScrollListener>>>, progress: Signal<f64>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut progress = progress;
        let Some(window) = web_sys::window() else {
            return;
        };
        let target = window.clone();
        let listener = gloo::events::EventListener::new(&window, "scroll", move |_| {
            let Some(document) = target.document() else {
                return;
            };
            let Some(track) = document.get_element_by_id(TRACK_ID) else {
                return;
            };
            let rect = track.get_bounding_client_rect();
            let viewport = target
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or_default();
            progress.set(scroll_progress(viewport, rect.top(), rect.height()));
        });
        *slot.borrow_mut() = Some(listener);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (slot, progress);
}

/// The journey section: heading, one block per year and the beam-filled rail.
///
/// Renders [`JOURNEY`] when `entries` is empty.
#[component]
pub fn Timeline(#[props(default)] entries: Vec<TimelineEntry>) -> Element {
    let entries = if entries.is_empty() {
        JOURNEY.to_vec()
    } else {
        entries
    };

    let mut track_height = use_signal(|| 0.0f64);
    let progress = use_signal(|| 0.0f64);
    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));

    use_effect(|| ensure_stylesheet(TIMELINE_STYLE_ID, TIMELINE_CSS));
    use_effect(move || watch_scroll(&listener, progress));

    let track_px = track_height();
    let beam_px = progress() * track_px;
    let beam_alpha = beam_opacity(progress());
    let rail_style = format!("height: {track_px:.0}px;");
    let beam_style = format!("height: {beam_px:.0}px; opacity: {beam_alpha:.2};");

    rsx! {
        div { class: "journey",
            div { class: "journey-heading",
                h2 { "OUR JOURNEY" }
                p { "THIS IS HOW IT STARTED" }
            }
            div {
                id: TRACK_ID,
                class: "journey-track",
                onmounted: move |event: Event<MountedData>| async move {
                    if let Ok(rect) = event.data().get_client_rect().await {
                        track_height.set(rect.size.height);
                    }
                },
                for entry in entries {
                    div { key: "{entry.year}", class: "journey-entry",
                        div { class: "journey-meta",
                            div { class: "journey-marker",
                                div { class: "journey-marker-dot" }
                            }
                            span { class: "journey-year", "{entry.year}" }
                            h3 { class: "journey-title", "{entry.title}" }
                        }
                        div { class: "journey-body",
                            EntryGallery { title: entry.title, images: entry.images }
                            p { class: "journey-text", "{entry.content}" }
                        }
                    }
                }
                div { class: "journey-rail", style: rail_style,
                    div { class: "journey-beam", style: beam_style }
                }
            }
        }
    }
}

/// Ring gallery for one entry: ghost logo underlay, the previous image
/// dimmed behind, the active image with a randomized enter animation and a
/// chevron button on each side.
#[component]
fn EntryGallery(title: &'static str, images: &'static [&'static str]) -> Element {
    let mut active = use_signal(|| 0usize);
    let mut variant = use_signal(|| 0usize);
    let mut logo_failed = use_signal(|| false);

    // Randomized only after mount so server markup stays deterministic.
    use_effect(move || variant.set(random_variant()));

    if images.is_empty() {
        return rsx! {};
    }
    if let [only] = images {
        return rsx! {
            div { class: "journey-gallery journey-gallery-single",
                img { src: *only, alt: image_alt(title, 0), draggable: "false" }
            }
        };
    }

    let count = images.len();
    let current = active();
    let behind = prev_index(current, count);
    let enter = variant().min(ENTER_VARIANTS - 1);
    // The key remounts the active frame so the animation replays per step.
    let active_key = format!("{}-{enter}", images[current]);
    let enter_class = format!("journey-gallery-active journey-enter-{enter}");

    let retreat = move |_: Event<MouseData>| {
        variant.set(random_variant());
        let current = *active.peek();
        active.set(prev_index(current, count));
    };
    let advance = move |_: Event<MouseData>| {
        variant.set(random_variant());
        let current = *active.peek();
        active.set(next_index(current, count));
    };

    rsx! {
        div { class: "journey-gallery",
            span { class: "journey-gallery-logo", aria_hidden: "true",
                if logo_failed() {
                    FallbackLogo {}
                } else {
                    img {
                        src: "/svg/AVASA.svg",
                        alt: "AVASA Logo",
                        draggable: "false",
                        onerror: move |_| logo_failed.set(true),
                    }
                }
            }
            div { class: "journey-gallery-behind",
                img {
                    src: images[behind],
                    alt: image_alt(title, behind),
                    draggable: "false",
                }
            }
            div { key: "{active_key}", class: enter_class,
                img {
                    src: images[current],
                    alt: image_alt(title, current),
                    draggable: "false",
                }
            }
            button {
                r#type: "button",
                class: "journey-gallery-nav journey-gallery-prev",
                aria_label: "Previous image",
                onclick: retreat,
                svg { width: "20", height: "20", fill: "none", view_box: "0 0 24 24",
                    path {
                        d: "M15 19l-7-7 7-7",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
            button {
                r#type: "button",
                class: "journey-gallery-nav journey-gallery-next",
                aria_label: "Next image",
                onclick: advance,
                svg { width: "20", height: "20", fill: "none", view_box: "0 0 24 24",
                    path {
                        d: "M9 5l7 7-7 7",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                }
            }
        }
    }
}

/// Inline stand-in shown when the logo asset fails to load.
#[component]
fn FallbackLogo() -> Element {
    rsx! {
        svg { view_box: "0 0 64 64", fill: "none", "aria-hidden": "true",
            circle {
                cx: "32",
                cy: "32",
                r: "30",
                stroke: "#a78bfa",
                stroke_width: "4",
                fill: "#fff",
            }
            path {
                d: "M32 14L44 50H20L32 14Z",
                fill: "#6366f1",
                stroke: "#a78bfa",
                stroke_width: "2",
                stroke_linejoin: "round",
            }
            circle {
                cx: "32",
                cy: "32",
                r: "6",
                fill: "#fff",
                stroke: "#6366f1",
                stroke_width: "2",
            }
        }
    }
}

const TIMELINE_CSS: &str = r#"
.journey {
    width: 100%;
    padding-top: 4rem;
    background: #fff;
}

.journey-heading {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem 1rem 0;
}

.journey-heading h2 {
    margin-bottom: 0.25rem;
    font-size: 2.25rem;
    color: #000;
}

.journey-heading p {
    max-width: 24rem;
    font-size: 0.9rem;
    color: #404040;
}

.journey-track {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding-bottom: 5rem;
}

.journey-entry {
    display: flex;
    gap: 2.5rem;
    justify-content: flex-start;
    padding-top: 3rem;
}

.journey-meta {
    position: sticky;
    top: 6rem;
    z-index: 40;
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    align-self: flex-start;
    width: 100%;
    max-width: 24rem;
    padding-left: 5rem;
}

.journey-marker {
    position: absolute;
    left: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    height: 2.5rem;
    width: 2.5rem;
    background: #fff;
    border-radius: 9999px;
}

.journey-marker-dot {
    height: 1rem;
    width: 1rem;
    background: #e5e5e5;
    border: 1px solid #d4d4d4;
    border-radius: 9999px;
}

.journey-year {
    margin-bottom: 0.25rem;
    font-size: 1.875rem;
    font-weight: 800;
    color: #9333ea;
}

.journey-title {
    font-size: 1.5rem;
    font-weight: 700;
    color: #737373;
}

.journey-body {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    width: 100%;
    padding-right: 1rem;
}

.journey-text {
    margin-top: 0.5rem;
    font-size: 1.05rem;
    line-height: 1.6;
    color: #404040;
}

.journey-rail {
    overflow: hidden;
    position: absolute;
    left: 2rem;
    top: 0;
    width: 2px;
    background: linear-gradient(to bottom, transparent 0%, #e5e5e5 10%, #e5e5e5 90%, transparent 99%);
}

.journey-beam {
    position: absolute;
    top: 0;
    left: 0;
    width: 2px;
    border-radius: 9999px;
    background: linear-gradient(to top, #a855f7 0%, #3b82f6 10%, transparent 100%);
}

.journey-gallery {
    position: relative;
    display: flex;
    align-items: center;
    width: 220px;
    height: 220px;
    max-width: 320px;
    max-height: 260px;
}

.journey-gallery img {
    display: block;
    width: 100%;
    height: 100%;
    object-fit: cover;
    object-position: center;
    border-radius: 1rem;
    border: 1px solid #e5e7eb;
    box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}

.journey-gallery-single {
    background: #fff;
    overflow: hidden;
}

.journey-gallery-logo {
    position: absolute;
    inset: 0;
    z-index: 0;
    pointer-events: none;
}

.journey-gallery-logo img,
.journey-gallery-logo svg {
    width: 100%;
    height: 100%;
    object-fit: contain;
    opacity: 0.25;
    border: none;
    border-radius: 0;
    box-shadow: none;
}

.journey-gallery-behind {
    position: absolute;
    inset: 0;
    z-index: 5;
    pointer-events: none;
    transform: scale(0.8) translateY(40px);
    transform-origin: bottom;
    overflow: hidden;
}

.journey-gallery-behind img {
    opacity: 0.3;
    filter: blur(3px);
}

.journey-gallery-active {
    position: absolute;
    inset: 0;
    z-index: 40;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    perspective: 800px;
}

.journey-gallery-nav {
    position: absolute;
    top: 50%;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    height: 2rem;
    width: 2rem;
    transform: translateY(-50%);
    background: #f3f4f6;
    border: none;
    border-radius: 9999px;
    box-shadow: 0 1px 3px rgb(0 0 0 / 0.2);
    opacity: 0.3;
    cursor: pointer;
}

.journey-gallery-nav:hover {
    transform: translateY(-50%) scale(1.1);
}

.journey-gallery-prev {
    left: 0;
}

.journey-gallery-next {
    right: 0;
}

.journey-enter-0 {
    animation: journeyEnterSlide 0.55s ease-in-out both;
}

.journey-enter-1 {
    animation: journeyEnterFlipY 0.6s ease-in-out both;
}

.journey-enter-2 {
    animation: journeyEnterRise 0.5s ease-in-out both;
}

.journey-enter-3 {
    animation: journeyEnterZoom 0.5s ease-in-out both;
}

.journey-enter-4 {
    animation: journeyEnterFlipX 0.6s ease-in-out both;
}

@keyframes journeyEnterSlide {
    from {
        opacity: 0;
        transform: translateX(80px) rotate(-15deg) scale(0.92);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

@keyframes journeyEnterFlipY {
    from {
        opacity: 0;
        transform: rotateY(90deg) scale(0.95);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

@keyframes journeyEnterRise {
    from {
        opacity: 0;
        transform: translateY(60px) scale(0.9);
        filter: blur(6px);
    }
    to {
        opacity: 1;
        transform: none;
        filter: blur(0);
    }
}

@keyframes journeyEnterZoom {
    from {
        opacity: 0;
        transform: scale(1.2);
        filter: brightness(1.5) grayscale(0.5);
    }
    to {
        opacity: 1;
        transform: none;
        filter: brightness(1) grayscale(0);
    }
}

@keyframes journeyEnterFlipX {
    from {
        opacity: 0;
        transform: rotateX(90deg) scale(0.95);
    }
    to {
        opacity: 1;
        transform: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_data_is_well_formed() {
        assert_eq!(JOURNEY.len(), 4);
        let years: Vec<_> = JOURNEY.iter().map(|entry| entry.year).collect();
        assert_eq!(years, ["2022", "2023", "2024", "2025"]);
        for entry in JOURNEY {
            assert!(!entry.images.is_empty(), "{} has no images", entry.year);
            assert_eq!(entry.content.trim_end(), entry.content);
        }
    }

    #[test]
    fn gallery_indices_wrap() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn alt_text_marks_the_leading_icon() {
        assert_eq!(
            image_alt("The Beginning of Avasa", 0),
            "The Beginning of Avasa icon"
        );
        assert_eq!(
            image_alt("The Beginning of Avasa", 2),
            "The Beginning of Avasa image 3"
        );
    }

    #[test]
    fn progress_spans_the_tracked_range() {
        // 1000px viewport, 2000px track: the range runs from top = 100 down
        // to top = -1500, where the track bottom sits at half the viewport.
        assert_eq!(scroll_progress(1000.0, 100.0, 2000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, -700.0, 2000.0), 0.5);
        assert_eq!(scroll_progress(1000.0, -1500.0, 2000.0), 1.0);
    }

    #[test]
    fn progress_clamps_outside_the_range() {
        assert_eq!(scroll_progress(1000.0, 400.0, 2000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, -2000.0, 2000.0), 1.0);
    }

    #[test]
    fn short_tracks_snap_to_the_nearest_edge() {
        assert_eq!(scroll_progress(1000.0, 50.0, 300.0), 1.0);
        assert_eq!(scroll_progress(1000.0, 500.0, 300.0), 0.0);
    }

    #[test]
    fn beam_opacity_saturates_after_a_tenth() {
        assert_eq!(beam_opacity(0.0), 0.0);
        assert_eq!(beam_opacity(0.05), 0.5);
        assert_eq!(beam_opacity(0.1), 1.0);
        assert_eq!(beam_opacity(0.8), 1.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_variant_choice_is_deterministic() {
        assert_eq!(random_variant(), 0);
    }
}
