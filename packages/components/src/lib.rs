#![doc = include_str!("../README.md")]

mod carousel;
mod escape;
mod timeline;
mod transition_link;

pub use carousel::{GalleryCarousel, GalleryItem, GALLERY_ITEMS};
pub use escape::escape_quotes;
pub use timeline::{Timeline, TimelineEntry, JOURNEY};
pub use transition_link::{TransitionLink, TransitionLinkProps};
