use libm::fmodf;

use crate::color::{Rgbw, rgbw};

/// Last position of the wheel: three bands of 256 steps
const WHEEL_STEPS: f32 = 256.0 * 3.0 - 1.0;

/// Green channel compensation applied by [`wheel`]
///
/// WS281x rings render green noticeably brighter than red and blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreenBias {
    /// Use the raw green channel
    Full,
    /// Halve the green channel
    #[default]
    Halved,
}

/// Limit a fraction to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp(t: f32) -> f32 {
    if t.is_nan() || t < 0.0 {
        0.0
    } else if t > 1.0 {
        1.0
    } else {
        t
    }
}

/// Wrap a hue into `[0, 1)`
pub fn wrap_hue(hue: f32) -> f32 {
    let mut hue = fmodf(hue, 1.0);
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue >= 1.0 { 0.0 } else { hue }
}

/// Map a position in `[0, 1]` to a color
///
/// The wheel runs green -> red -> blue -> green in three equal bands.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wheel(pos: f32, bias: GreenBias) -> Rgbw {
    let pos = (clamp(pos) * WHEEL_STEPS) as u16;
    let (r, g, b) = match pos {
        0..=255 => (pos, 255 - pos, 0),
        256..=511 => {
            let pos = pos - 256;
            (255 - pos, 0, pos)
        }
        _ => {
            let pos = pos - 512;
            (0, pos, 255 - pos)
        }
    };
    let g = match bias {
        GreenBias::Full => g,
        GreenBias::Halved => g / 2,
    };

    rgbw(r as u8, g as u8, b as u8, 0)
}
