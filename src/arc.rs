//! Ring geometry
//!
//! Converts angles on the table into pixel ranges on the LED ring.
//! Pixel ranges are kept unwrapped (they may start below zero or end past
//! the pixel count) and are only reduced modulo the pixel count when
//! iterated.

use libm::{floorf, fmodf};

/// Degrees in a full turn of the ring
pub const FULL_TURN: f32 = 360.0;

/// Normalize an angle in degrees to `[0, 360)`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let mut degrees = fmodf(degrees, FULL_TURN);
    if degrees < 0.0 {
        degrees += FULL_TURN;
    }
    if degrees >= FULL_TURN { 0.0 } else { degrees }
}

/// Index of the pixel under an angle, before wrapping
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn degrees_to_index(degrees: f32, led_count: usize) -> isize {
    floorf(degrees * led_count as f32 / FULL_TURN) as isize
}

/// Wrap an unbounded pixel index onto the ring
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn wrap_index(index: isize, led_count: usize) -> usize {
    index.rem_euclid(led_count as isize) as usize
}

/// Half-open range of ring pixels `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelArc {
    pub start: isize,
    pub end: isize,
}

impl PixelArc {
    /// Pixels covering the arc from `left` to `right` degrees
    ///
    /// The end pixel is inclusive, so the range always holds at least one
    /// pixel. If `right` was already wrapped below `left`, the end is
    /// moved one ring further.
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_degrees(left: f32, right: f32, led_count: usize) -> Self {
        let start = degrees_to_index(left, led_count);
        let mut end = degrees_to_index(right, led_count) + 1;
        if end < start {
            end += led_count as isize;
        }
        Self { start, end }
    }

    /// Pixels covering `spread_degrees` clockwise from `degrees`
    pub fn from_spread(degrees: f32, spread_degrees: f32, led_count: usize) -> Self {
        Self::from_degrees(degrees, degrees + spread_degrees, led_count)
    }

    /// Range walking forward from `start` to `end` around the ring
    ///
    /// An `end` behind `start` is moved one ring further.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn forward(start: isize, mut end: isize, led_count: usize) -> Self {
        if start > end {
            end += led_count as isize;
        }
        Self { start, end }
    }

    /// Number of pixels in the range
    #[allow(clippy::cast_sign_loss)]
    pub const fn len(self) -> usize {
        if self.end > self.start {
            (self.end - self.start) as usize
        } else {
            0
        }
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Wrapped pixel indices in range order
    pub fn indices(self, led_count: usize) -> impl Iterator<Item = usize> {
        let range = if led_count == 0 {
            0..0
        } else {
            self.start..self.end
        };
        range.map(move |index| wrap_index(index, led_count))
    }
}
