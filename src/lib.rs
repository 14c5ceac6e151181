#![no_std]

pub mod arc;
pub mod color;
pub mod effect;
pub mod frame;
pub mod hue;
pub mod table;

pub use arc::PixelArc;
pub use effect::{EffectId, RingPainter, RingPainterConfig, TableEffect};
pub use frame::{FrameError, FrameStats};
pub use hue::{HueTracker, IdleHue};
pub use table::{TableState, TableValues};

pub use color::{GreenBias, Rgbw, clamp, color_blend, is_diff, rgbw, wheel};
pub use embassy_time::{Duration, Instant};

use color::BLACK;

/// Abstract LED ring trait
///
/// Implement this trait to expose the host's LED strip to the effects.
/// Indices passed by the effects are always below `pixel_count`.
pub trait LedRing {
    /// Number of pixels on the ring
    fn pixel_count(&self) -> usize;

    /// Read the color of a pixel
    fn pixel(&self, index: usize) -> Rgbw;

    /// Write the color of a pixel
    fn set_pixel(&mut self, index: usize, color: Rgbw);
}

impl LedRing for [Rgbw] {
    fn pixel_count(&self) -> usize {
        self.len()
    }

    fn pixel(&self, index: usize) -> Rgbw {
        self.get(index).copied().unwrap_or(BLACK)
    }

    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(led) = self.get_mut(index) {
            *led = color;
        }
    }
}

impl<const N: usize> LedRing for [Rgbw; N] {
    fn pixel_count(&self) -> usize {
        N
    }

    fn pixel(&self, index: usize) -> Rgbw {
        self.as_slice().pixel(index)
    }

    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        self.as_mut_slice().set_pixel(index, color);
    }
}
