//! Sleep fade
//!
//! Moves every pixel a small step towards a dim target on each frame.

use crate::{
    LedRing,
    color::{Rgbw, color_blend, is_diff, rgbw},
};

/// Color the ring fades to while the table sleeps
pub const FADE_TARGET: Rgbw = rgbw(0, 0, 0, 128);

/// Fraction of the remaining distance covered per frame
pub const FADE_AMOUNT: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    pub target: Rgbw,
    pub amount: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeConfig {
    pub const fn new() -> Self {
        Self {
            target: FADE_TARGET,
            amount: FADE_AMOUNT,
        }
    }
}

/// Blend every pixel one step towards the fade target
///
/// Returns `true` if any pixel changed.
pub fn fade_step<S: LedRing + ?Sized>(strip: &mut S, fade: FadeConfig) -> bool {
    let mut changed = false;
    for index in 0..strip.pixel_count() {
        let current = strip.pixel(index);
        let faded = color_blend(current, fade.target, fade.amount);
        strip.set_pixel(index, faded);
        changed |= is_diff(current, faded);
    }
    changed
}
