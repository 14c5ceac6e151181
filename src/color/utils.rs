use smart_leds::White;

use crate::color::{Rgbw, clamp};

/// Create a color from its red, green, blue and white channels
#[inline]
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}

/// Linearly interpolate every channel (white included) from `a` towards `b`
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0.0 = all a, 1.0 = all b)
///
/// Channels are truncated, so a blend never overshoots `b`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn color_blend(a: Rgbw, b: Rgbw, amount_of_b: f32) -> Rgbw {
    let t = clamp(amount_of_b);
    let mix = |from: u8, to: u8| {
        let from = f32::from(from);
        (from + (f32::from(to) - from) * t) as u8
    };

    rgbw(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(a.a.0, b.a.0),
    )
}

/// Check if two colors differ in any channel
#[inline]
pub fn is_diff(a: Rgbw, b: Rgbw) -> bool {
    a.r != b.r || a.g != b.g || a.b != b.b || a.a.0 != b.a.0
}

/// Create a color from a packed u32 value (0xWWRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn color_from_u32(color: u32) -> Rgbw {
    rgbw(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
        ((color >> 24) & 0xFF) as u8,
    )
}

/// Pack a color into a u32 value (0xWWRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn color_to_u32(color: Rgbw) -> u32 {
    (color.a.0 as u32) << 24 | (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}
