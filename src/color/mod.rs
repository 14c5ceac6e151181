mod gradient;
mod utils;
mod wheel;

pub use gradient::{fill_arc, fill_rainbow};
use smart_leds::{RGBA, White};
pub use utils::{color_blend, color_from_u32, color_to_u32, is_diff, rgbw};
pub use wheel::{GreenBias, clamp, wheel, wrap_hue};

/// RGB color with a white channel stored in the alpha slot
pub type Rgbw = RGBA<u8, White<u8>>;

pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);
