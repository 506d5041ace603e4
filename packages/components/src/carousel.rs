//! The "GALLERY" card strip.
//!
//! Every activity card renders at once in a scroll-snap strip. At most one
//! card is expanded at a time; clicking a collapsed card expands it and
//! collapses the rest, clicking the expanded card collapses everything.

use avasa_transition::ensure_stylesheet;
use dioxus_lib::prelude::*;

/// One activity card.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// Every card in the gallery, in strip order.
pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        title: "Care Meal",
        image: "/main gallery/a.JPG",
        description: "Serving smiles and lunch at Nayasawera NGO, Jaipur.",
    },
    GalleryItem {
        title: "Refreshment Drive",
        image: "/main gallery/b.JPG",
        description: "Serving smiles and energy through every sip and snack.",
    },
    GalleryItem {
        title: "Beat the Heat Drive",
        image: "/main gallery/c.JPG",
        description: "Bringing cool relief to warm days — serving hydration with heart.",
    },
    GalleryItem {
        title: "Golden Bonds ",
        image: "/main gallery/d.JPG",
        description: "Sharing smiles and stories with the golden generation.",
    },
    GalleryItem {
        title: "Threads of Kindness",
        image: "/main gallery/e.JPG",
        description: "From our hearts to their hands — a gesture of warmth and dignity",
    },
    GalleryItem {
        title: "Health in Hand",
        image: "/main gallery/f.JPG",
        description: "Distributing essential medical kits — a step towards safer, healthier lives.",
    },
    GalleryItem {
        title: "Nourish with Love",
        image: "/main gallery/g.JPG",
        description: "Serving not just food, but kindness and connection.",
    },
    GalleryItem {
        title: "Steps of Joy",
        image: "/main gallery/h.JPG",
        description: "Dancing beyond limits, spreading joy and confidence with every move.",
    },
    GalleryItem {
        title: "Golden Moments",
        image: "/main gallery/i.JPG",
        description: "Spreading joy and warmth while celebrating with the wise hearts of our community.",
    },
    GalleryItem {
        title: "Little lights",
        image: "/main gallery/j.JPG",
        description: "Sharing laughter, stories, and unforgettable moments with the bright stars of tomorrow.",
    },
    GalleryItem {
        title: "Meals that matter",
        image: "/main gallery/k.JPG",
        description: "Extending a helping hand with every meal to those who need it most.",
    },
    GalleryItem {
        title: "Milestone Moment",
        image: "/main gallery/l.JPG",
        description: "Celebrating our official registration — a new chapter of purpose and impact begins.",
    },
    GalleryItem {
        title: "Meals of Kindness",
        image: "/main gallery/m.JPG",
        description: "Joining hands to serve nourishing meals with love at the NGO.",
    },
    GalleryItem {
        title: "Young Connections",
        image: "/main gallery/n.JPG",
        description: "Spreading smiles and inspiration while engaging with bright young minds at the government school.",
    },
    GalleryItem {
        title: "Medikit Drive",
        image: "/main gallery/o.JPG",
        description: "Providing essential health kits to support safer and healthier communities.",
    },
    GalleryItem {
        title: "Hands of Hope",
        image: "/main gallery/p.JPG",
        description: "to be changed",
    },
    GalleryItem {
        title: "Hygiene for her",
        image: "/main gallery/q.JPG",
        description: "Empowering women with access to menstrual hygiene and dignity.",
    },
    GalleryItem {
        title: "Joyful Bonds",
        image: "/main gallery/r.JPG",
        description: "Creating joyful memories through laughter, love, and learning with the kids at the NGO.",
    },
    GalleryItem {
        title: "Little Smiles",
        image: "/main gallery/s.JPG",
        description: "A day full of fun, friendship, and heartfelt connection.",
    },
    GalleryItem {
        title: "Equip to Learn",
        image: "/main gallery/t.JPG",
        description: "Equipping young minds with the tools to learn, dream, and grow",
    },
    GalleryItem {
        title: "Wellness for Women",
        image: "/main gallery/u.JPG",
        description: "Spreading awareness and distributing sanitary pads to support women's hygiene and dignity in the village",
    },
    GalleryItem {
        title: "Lunch with Love",
        image: "/main gallery/v.JPG",
        description: "Spending heartfelt moments over lunch, laughter, and stories with the elderly.",
    },
    GalleryItem {
        title: "Care & Connection",
        image: "/main gallery/w.JPG",
        description: "Lighting up young hearts with time, care, and kindness.",
    },
    GalleryItem {
        title: "Heartfelt Hours",
        image: "/main gallery/x.JPG",
        description: " Time, laughter, and love — all shared in one special visit.",
    },
    GalleryItem {
        title: "Timeless Fun",
        image: "/main gallery/y.JPG",
        description: "From carrom to conversations, every moment was filled with laughter and light.",
    },
    GalleryItem {
        title: "Roots of Change",
        image: "/main gallery/z.JPG",
        description: "Sharing thoughts, solutions, and support with inspiring women in the village.",
    },
    GalleryItem {
        title: "Wellness Outreach",
        image: "/main gallery/a1.JPG",
        description: "Bringing basic healthcare closer to the slum communities through medical kits.",
    },
    GalleryItem {
        title: "Jaipur's First Step",
        image: "/main gallery/a2.JPG",
        description: "Launched our first Jaipur event by connecting with the brightest hearts — the kids.",
    },
];

const GALLERY_STYLE_ID: &str = "avasa-gallery-style";

/// Clicking the expanded card collapses everything, clicking any other card
/// moves the expansion there.
fn toggle(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// The gallery strip with its animated heading.
#[component]
pub fn GalleryCarousel() -> Element {
    let mut active = use_signal(|| Some(0usize));

    use_effect(|| ensure_stylesheet(GALLERY_STYLE_ID, GALLERY_CSS));

    rsx! {
        section { class: "game-section centered-section",
            h2 { class: "line-title animated-title pink-text",
                AnimatedWord { word: "GALLERY" }
            }
            div { class: "gallery-strip",
                for (index, item) in GALLERY_ITEMS.iter().enumerate() {
                    GalleryCard {
                        key: "{item.image}",
                        item: item.clone(),
                        active: active() == Some(index),
                        onactivate: move |_| {
                            let current = *active.peek();
                            active.set(toggle(current, index));
                        },
                    }
                }
            }
        }
    }
}

/// Heading text rendered one letter at a time, each with a staggered delay.
#[component]
fn AnimatedWord(word: String) -> Element {
    let letters = word.chars().enumerate().map(|(index, letter)| {
        let delay = index as f64 * 0.08;
        let style = format!("animation-delay: {delay:.2}s;");
        let glyph = if letter == ' ' {
            '\u{a0}'.to_string()
        } else {
            letter.to_string()
        };
        rsx! {
            span { class: "animated-letter", style, "{glyph}" }
        }
    });

    rsx! {
        span { class: "animated-word", {letters} }
    }
}

#[component]
fn GalleryCard(item: GalleryItem, active: bool, onactivate: EventHandler<MouseEvent>) -> Element {
    let card_class = if active { "item active" } else { "item" };

    rsx! {
        div { class: card_class, onclick: move |event| onactivate.call(event),
            div { class: "item-image-wrapper",
                img {
                    class: "item-image",
                    src: item.image,
                    alt: item.title,
                    draggable: "false",
                }
            }
            div { class: "item-float-bg" }
            div { class: "item-desc pink-text",
                h3 { class: "item-title-animated pink-text", {item.title} }
                p { class: "game-desc-white", {item.description} }
            }
            div { class: "item-glow" }
        }
    }
}

const GALLERY_CSS: &str = r#"
.centered-section {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 0 50px;
    position: relative;
    top: -15px;
}

.game-section {
    padding: 0;
    overflow: hidden;
}

.line-title {
    width: 400px;
    position: relative;
    margin: 0 auto 48px;
    padding-bottom: 16px;
    font-size: 2rem;
    font-weight: 700;
    text-transform: capitalize;
    text-align: center;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(2px);
    z-index: 20;
}

.animated-title {
    animation: fadeInDown 1s cubic-bezier(0.4, 2, 0.6, 1);
}

@keyframes fadeInDown {
    0% {
        opacity: 0;
        transform: translateY(-40px) scale(0.95);
    }
    100% {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
}

.animated-word {
    display: inline-block;
}

.animated-letter {
    display: inline-block;
    opacity: 0;
    transform: translateY(24px) scale(0.98);
    animation: headingLetterFadeIn 0.5s cubic-bezier(0.4, 2, 0.6, 1) forwards;
}

@keyframes headingLetterFadeIn {
    0% {
        opacity: 0;
        transform: translateY(24px) scale(0.98);
    }
    100% {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
}

.gallery-strip {
    display: flex;
    align-items: flex-end;
    gap: 30px;
    width: 100%;
    padding: 0 24px 20px;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
}

.item {
    flex-shrink: 0;
    scroll-snap-align: center;
    margin: 0 0 60px;
    width: 320px;
    height: 400px;
    display: flex;
    align-items: flex-end;
    background: #343434;
    border-radius: 16px;
    overflow: hidden;
    position: relative;
    transition: all 0.4s cubic-bezier(0.4, 2, 0.6, 1);
    cursor: pointer;
}

.item.active {
    width: 500px;
    box-shadow: 12px 40px 40px rgba(0, 0, 0, 0.25);
}

.item:after {
    content: "";
    position: absolute;
    height: 100%;
    width: 100%;
    left: 0;
    top: 0;
    background-image: linear-gradient(
            to bottom,
            rgba(0, 0, 0, 0) 60%,
            rgba(0, 0, 0, 0.7) 100%
        ),
        linear-gradient(
            to right,
            rgba(0, 0, 0, 0.18) 0%,
            rgba(0, 0, 0, 0) 20%,
            rgba(0, 0, 0, 0) 80%,
            rgba(0, 0, 0, 0.18) 100%
        );
    z-index: 1;
    pointer-events: none;
}

.item-image-wrapper {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 0;
    display: flex;
    align-items: stretch;
    justify-content: stretch;
}

.item-image {
    width: 100%;
    height: 100%;
    object-fit: contain;
    object-position: center;
    pointer-events: none;
    user-select: none;
    display: block;
    background: #222;
}

.item-float-bg {
    position: absolute;
    inset: 0;
    z-index: 1;
    pointer-events: none;
    background: none;
    border-radius: 16px;
    animation: floatBg 4s ease-in-out infinite alternate;
    opacity: 0.15;
    filter: blur(8px) brightness(1.2);
}

@keyframes floatBg {
    0% {
        transform: scale(1) translateY(0px);
    }
    100% {
        transform: scale(1.04) translateY(-10px);
    }
}

.item-glow {
    display: none;
}

.item.active .item-glow {
    display: block;
    position: absolute;
    top: -4px;
    left: -4px;
    right: -4px;
    bottom: -4px;
    border-radius: 20px;
    pointer-events: none;
    z-index: 2;
    box-shadow: 0 0 32px 8px #e73700, 0 0 0 0 #fff;
    animation: glowPulse 1.2s infinite alternate;
}

@keyframes glowPulse {
    0% {
        box-shadow: 0 0 32px 8px #e73700, 0 0 0 0 #fff;
        opacity: 0.7;
    }
    100% {
        box-shadow: 0 0 48px 16px #e73700, 0 0 8px 2px #fff;
        opacity: 1;
    }
}

.item-title-animated {
    animation: fadeInUp 0.7s cubic-bezier(0.4, 2, 0.6, 1);
}

@keyframes fadeInUp {
    0% {
        opacity: 0;
        transform: translateY(24px) scale(0.98);
    }
    100% {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
}

.item-desc {
    padding: 0 24px 12px;
    color: #fff;
    position: relative;
    z-index: 2;
    transform: translateY(calc(100% - 54px));
    transition: all 0.4s cubic-bezier(0.4, 2, 0.6, 1);
}

.item.active .item-desc {
    transform: none;
}

.item-desc p {
    opacity: 0;
    transform: translateY(32px);
    transition: all 0.4s cubic-bezier(0.4, 2, 0.6, 1) 0.2s;
}

.item.active .item-desc p {
    opacity: 1;
    transform: translateY(0);
    animation: fadeInText 0.6s 0.2s both;
}

@keyframes fadeInText {
    0% {
        opacity: 0;
        transform: translateY(32px);
    }
    100% {
        opacity: 1;
        transform: translateY(0);
    }
}

.game-desc-white {
    color: #fff;
}

.pink-text,
.pink-text * {
    color: #ff69b4;
}

@media (max-width: 767px) {
    .centered-section {
        padding: 0 2vw;
        min-height: 100vh;
    }

    .line-title {
        width: 290px;
        margin-bottom: 28px;
        font-size: 22px;
    }

    .item {
        width: 240px;
        height: 340px;
        margin: 0 0 48px;
    }

    .item.active {
        width: 320px;
    }

    .item-desc {
        padding: 0 18px 10px;
    }

    .item-float-bg {
        filter: blur(6px) brightness(1.1);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_strip_holds_every_activity() {
        assert_eq!(GALLERY_ITEMS.len(), 28);
        assert_eq!(GALLERY_ITEMS.first().unwrap().title, "Care Meal");
        assert_eq!(GALLERY_ITEMS.last().unwrap().title, "Jaipur's First Step");
    }

    #[test]
    fn every_card_points_into_the_main_gallery() {
        for item in GALLERY_ITEMS {
            assert!(
                item.image.starts_with("/main gallery/"),
                "unexpected path {}",
                item.image
            );
            assert!(item.image.ends_with(".JPG"), "unexpected path {}", item.image);
            assert!(!item.title.is_empty());
            assert!(!item.description.is_empty());
        }
    }

    #[test]
    fn clicking_toggles_the_expanded_card() {
        assert_eq!(toggle(Some(0), 0), None);
        assert_eq!(toggle(Some(0), 3), Some(3));
        assert_eq!(toggle(None, 2), Some(2));
    }
}
