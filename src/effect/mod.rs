//! Table effects
//!
//! Both ring effects are presets of one [`RingPainter`]. Effects are
//! addressed by [`EffectId`] so the host can load them by name or number.

mod fade;
mod ring_painter;

use embassy_time::Instant;
pub use fade::{FADE_AMOUNT, FADE_TARGET, FadeConfig, fade_step};
pub use ring_painter::{BallPlacement, RainbowAnchor, RingPainter, RingPainterConfig};

use crate::{LedRing, frame::FrameError, table::TableValues};

const EFFECT_NAME_RAINBOW_INVERTED: &str = "rainbow_inverted";
const EFFECT_NAME_RAINBOW_PAINT: &str = "rainbow_paint";

const EFFECT_ID_RAINBOW_INVERTED: u8 = 0;
const EFFECT_ID_RAINBOW_PAINT: u8 = 1;

/// Effect driven by the table motion state
pub trait TableEffect {
    /// Prepare the effect for a run
    ///
    /// Called once before the first [`TableEffect::update`].
    fn init<S: LedRing + ?Sized>(
        &mut self,
        _strip: &mut S,
        _table: &mut TableValues,
        _now: Instant,
    ) {
    }

    /// Render a single frame
    ///
    /// Sets `table.do_update` when the strip should be refreshed. A failed
    /// frame is skipped without writing any pixel.
    fn update<S: LedRing + ?Sized>(
        &mut self,
        strip: &mut S,
        table: &mut TableValues,
        now: Instant,
    ) -> Result<(), FrameError>;
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    /// Ball grows with radius, rainbow always starts at hue 0
    RainbowInverted = EFFECT_ID_RAINBOW_INVERTED,
    /// Ball shrinks with radius, flanked by its complement
    RainbowPaint = EFFECT_ID_RAINBOW_PAINT,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_RAINBOW_INVERTED => Self::RainbowInverted,
            EFFECT_ID_RAINBOW_PAINT => Self::RainbowPaint,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RainbowInverted => EFFECT_NAME_RAINBOW_INVERTED,
            Self::RainbowPaint => EFFECT_NAME_RAINBOW_PAINT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_RAINBOW_INVERTED => Some(Self::RainbowInverted),
            EFFECT_NAME_RAINBOW_PAINT => Some(Self::RainbowPaint),
            _ => None,
        }
    }

    pub const fn to_config(self) -> RingPainterConfig {
        match self {
            Self::RainbowInverted => RingPainterConfig::rainbow_inverted(),
            Self::RainbowPaint => RingPainterConfig::rainbow_paint(),
        }
    }
}
