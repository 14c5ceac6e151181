//! Ring painter
//!
//! Paints a solid "ball" arc under the table ball and fills the rest of the
//! ring with a rainbow. While the table sleeps the ring fades out instead.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{EffectId, TableEffect, fade::FadeConfig, fade_step};
use crate::{
    LedRing,
    arc::{FULL_TURN, PixelArc, degrees_to_index},
    color::{GreenBias, clamp, fill_arc, fill_rainbow, wheel, wrap_hue},
    frame::{FrameError, FrameStats},
    hue::{DEFAULT_IDLE_CYCLE, HueTracker, IdleHue},
    table::{TableState, TableValues},
};

/// Smallest ball of the centered placement, also the flank width
const PAINT_MIN_FRACTION: f32 = 0.125;
/// Largest ball of the centered placement
const PAINT_MAX_FRACTION: f32 = 0.5;

/// How the ball arc is placed and sized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallPlacement {
    /// Starts at the ball angle and runs clockwise, covering `rho^2` of the ring
    Leading,
    /// Centered on the ball angle, shrinking from `max_fraction` at the center
    /// to `min_fraction` at the rim
    Centered {
        min_fraction: f32,
        max_fraction: f32,
    },
}

impl BallPlacement {
    /// Fraction of the ring covered by the ball at radius `rho`
    pub fn fraction(self, rho: f32) -> f32 {
        match self {
            // Sand area grows with the square of the radius
            Self::Leading => rho * rho,
            Self::Centered {
                min_fraction,
                max_fraction,
            } => min_fraction + (1.0 - rho) * (max_fraction - min_fraction),
        }
    }

    /// Pixels covered by the ball
    pub fn arc(self, degrees: f32, rho: f32, led_count: usize) -> PixelArc {
        let spread = self.fraction(rho) * FULL_TURN;
        match self {
            Self::Leading => PixelArc::from_spread(degrees, spread, led_count),
            Self::Centered { .. } => {
                PixelArc::from_degrees(degrees - spread / 2.0, degrees + spread / 2.0, led_count)
            }
        }
    }
}

/// Hue the rainbow fill starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowAnchor {
    /// Always start at hue 0
    Zero,
    /// Start at the complement of the ball hue
    Complement,
}

impl RainbowAnchor {
    pub fn starting_hue(self, hue: f32) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::Complement => wrap_hue(hue + 0.5),
        }
    }
}

/// Configuration for the ring painter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPainterConfig {
    pub ball: BallPlacement,
    /// Width of the complementary bands around the ball, as a ring fraction
    pub flank: Option<f32>,
    pub rainbow: RainbowAnchor,
    pub idle: IdleHue,
    pub green_bias: GreenBias,
    pub fade: FadeConfig,
}

impl RingPainterConfig {
    /// Ball grows with radius, rainbow restarts at hue 0, hue holds while idle
    pub const fn rainbow_inverted() -> Self {
        Self {
            ball: BallPlacement::Leading,
            flank: None,
            rainbow: RainbowAnchor::Zero,
            idle: IdleHue::Hold,
            green_bias: GreenBias::Halved,
            fade: FadeConfig::new(),
        }
    }

    /// Ball shrinks with radius between complementary bands, hue drifts while idle
    pub const fn rainbow_paint() -> Self {
        Self {
            ball: BallPlacement::Centered {
                min_fraction: PAINT_MIN_FRACTION,
                max_fraction: PAINT_MAX_FRACTION,
            },
            flank: Some(PAINT_MIN_FRACTION),
            rainbow: RainbowAnchor::Complement,
            idle: IdleHue::Drift {
                cycle: DEFAULT_IDLE_CYCLE,
            },
            green_bias: GreenBias::Halved,
            fade: FadeConfig::new(),
        }
    }
}

/// Ring effect following the table ball
#[derive(Debug, Clone)]
pub struct RingPainter {
    config: RingPainterConfig,
    hue: HueTracker,
    stats: FrameStats,
}

impl RingPainter {
    pub fn new(config: RingPainterConfig) -> Self {
        Self {
            config,
            hue: HueTracker::new(config.idle),
            stats: FrameStats::new(),
        }
    }

    pub fn from_id(id: EffectId) -> Self {
        Self::new(id.to_config())
    }

    /// Set the green channel compensation
    #[must_use]
    pub fn with_green_bias(mut self, bias: GreenBias) -> Self {
        self.config.green_bias = bias;
        self
    }

    /// Set the idle hue rotation period
    ///
    /// Has no effect on painters that hold the hue while idle.
    #[must_use]
    pub fn with_idle_cycle(mut self, cycle: Duration) -> Self {
        if let IdleHue::Drift { .. } = self.config.idle {
            self.config.idle = IdleHue::Drift { cycle };
            self.hue = HueTracker::new(self.config.idle);
        }
        self
    }

    /// Set the sleep fade
    #[must_use]
    pub fn with_fade(mut self, fade: FadeConfig) -> Self {
        self.config.fade = fade;
        self
    }

    pub const fn config(&self) -> &RingPainterConfig {
        &self.config
    }

    pub const fn hue_tracker(&self) -> &HueTracker {
        &self.hue
    }

    pub const fn stats(&self) -> &FrameStats {
        &self.stats
    }

    fn render<S: LedRing + ?Sized>(
        &mut self,
        strip: &mut S,
        table: &mut TableValues,
        now: Instant,
    ) -> Result<(), FrameError> {
        if table.state == TableState::Sleeping {
            if fade_step(strip, self.config.fade) {
                table.do_update = true;
            }
            return Ok(());
        }

        let led_count = strip.pixel_count();
        if led_count == 0 {
            return Err(FrameError::EmptyStrip);
        }
        if !table.theta.is_finite() {
            return Err(FrameError::InvalidTheta(table.theta));
        }
        if !table.rho.is_finite() {
            return Err(FrameError::InvalidRho(table.rho));
        }

        let degrees = table.degrees();
        let hue = self.hue.update(degrees, table.state, now);
        self.paint(strip, hue, degrees, clamp(table.rho));

        table.do_update = true;
        Ok(())
    }

    /// Paint the ball, its flanks and the rainbow for one frame
    #[allow(clippy::cast_possible_wrap)]
    fn paint<S: LedRing + ?Sized>(&self, strip: &mut S, hue: f32, degrees: f32, rho: f32) {
        let led_count = strip.pixel_count();
        let bias = self.config.green_bias;
        let ball = self.config.ball.arc(degrees, rho, led_count);

        let (rainbow_start, rainbow_end) = match self.config.flank {
            Some(fraction) => {
                let width = degrees_to_index(fraction * FULL_TURN, led_count);
                let ring = led_count as isize;
                let complement = wheel(wrap_hue(hue + 0.5), bias);
                let before = PixelArc {
                    start: ball.start + ring - width,
                    end: ball.start + ring,
                };
                let after = PixelArc {
                    start: ball.end,
                    end: ball.end + width,
                };
                fill_arc(strip, before, complement);
                fill_arc(strip, after, complement);
                (ball.end + width, ball.start - width)
            }
            None => (ball.end, ball.start),
        };

        fill_arc(strip, ball, wheel(hue, bias));

        let rainbow = PixelArc::forward(rainbow_start, rainbow_end, led_count);
        fill_rainbow(strip, rainbow, self.config.rainbow.starting_hue(hue), bias);
    }
}

impl TableEffect for RingPainter {
    fn init<S: LedRing + ?Sized>(
        &mut self,
        _strip: &mut S,
        _table: &mut TableValues,
        now: Instant,
    ) {
        self.hue.reset(now);
    }

    fn update<S: LedRing + ?Sized>(
        &mut self,
        strip: &mut S,
        table: &mut TableValues,
        now: Instant,
    ) -> Result<(), FrameError> {
        match self.render(strip, table, now) {
            Ok(()) => {
                self.stats.record_rendered();
                Ok(())
            }
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[RingPainter.update] skipping frame: {}", error);
                self.stats.record_skipped(error);
                Err(error)
            }
        }
    }
}
