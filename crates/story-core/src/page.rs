//! Arithmetic behind the page decorations, kept out of the DOM code.

use crate::constants::*;
use rand::Rng;

pub const SYNOPSIS_LANGS: [&str; 3] = ["ms", "en", "dusun"];

#[inline]
pub fn synopsis_id(lang: &str) -> String {
    format!("synopsis-{lang}")
}

/// A `.reveal` element activates once its top edge rises above the bottom
/// of the window by the reveal offset.
#[inline]
pub fn should_reveal(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - REVEAL_VISIBLE_OFFSET_PX
}

/// Document y to scroll to so a nav target lands below the fixed header.
#[inline]
pub fn nav_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - NAV_SCROLL_OFFSET_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Firefly {
    pub left_vw: f64,
    pub top_vh: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

impl Firefly {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_vw: rng.gen_range(0.0..100.0),
            top_vh: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen_range(0.0..FIREFLY_MAX_DELAY_SEC),
            duration_sec: FIREFLY_MIN_DURATION_SEC + rng.gen_range(0.0..FIREFLY_DURATION_SPAN_SEC),
        }
    }

    /// Inline style declarations, in the order the stylesheet expects.
    pub fn style_props(&self) -> [(&'static str, String); 4] {
        [
            ("left", format!("{}vw", self.left_vw)),
            ("top", format!("{}vh", self.top_vh)),
            ("animation-delay", format!("{}s", self.delay_sec)),
            ("animation-duration", format!("{}s", self.duration_sec)),
        ]
    }
}

pub fn fireflies(rng: &mut impl Rng) -> Vec<Firefly> {
    (0..FIREFLY_COUNT).map(|_| Firefly::random(rng)).collect()
}
