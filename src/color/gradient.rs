use crate::{
    LedRing,
    arc::PixelArc,
    color::{GreenBias, Rgbw, wheel, wrap_hue},
};

/// Paint every pixel of the arc with one color
pub fn fill_arc<S: LedRing + ?Sized>(strip: &mut S, arc: PixelArc, color: Rgbw) {
    let led_count = strip.pixel_count();
    for index in arc.indices(led_count) {
        strip.set_pixel(index, color);
    }
}

/// Fill the arc with a hue gradient spanning one full wheel turn
///
/// The first pixel gets `starting_hue`, the hue then grows linearly so
/// that the gradient would meet `starting_hue` again one pixel past the end.
#[allow(clippy::cast_precision_loss)]
pub fn fill_rainbow<S: LedRing + ?Sized>(
    strip: &mut S,
    arc: PixelArc,
    starting_hue: f32,
    bias: GreenBias,
) {
    let led_count = strip.pixel_count();
    let length = arc.len() as f32;
    for (offset, index) in arc.indices(led_count).enumerate() {
        let hue = wrap_hue(starting_hue + offset as f32 / length);
        strip.set_pixel(index, wheel(hue, bias));
    }
}
