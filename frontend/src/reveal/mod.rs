//! Scroll-triggered entrance animations.
//!
//! Sections hand an element (or a container whose children should follow
//! one another) to `binding::ScrollReveal`, which hides it immediately and
//! plays its entrance once it scrolls into the trigger region. In components
//! use [`use_scroll_reveal`] and [`use_stagger_reveal`].

mod binding;
mod dom;
mod easing;
mod hooks;
mod options;
mod platform;
mod profile;
mod threshold;
mod tween;

pub use dom::install;
pub use hooks::{use_count_up, use_scroll_reveal, use_stagger_reveal};
pub use options::RevealConfig;
pub use profile::RevealProfile;
