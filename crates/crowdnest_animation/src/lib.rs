//! Crowdnest Animation
//!
//! Frame-stepped animation primitives used by the landing page.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible easing curves, including cubic-bezier
//! - **Scroll State**: Geometric ease of a scroll position toward its target
//! - **Text Fader**: Timed cycle through headline texts with fade transitions

pub mod easing;
pub mod fader;
pub mod scroll;

pub use easing::{lerp, Easing};
pub use fader::{FadePhase, TextFader, TextFaderConfig};
pub use scroll::{snap_to_item, steps_to_settle, ScrollState, TravelDirection};
