//! Angle-to-hue mapping
//!
//! While the ball moves, the hue follows the ball angle. While the table is
//! idle the hue is either held or slowly rotated by a time-based offset.

use embassy_time::{Duration, Instant};

use crate::{
    arc::FULL_TURN,
    color::{clamp, wrap_hue},
    table::TableState,
};

/// Default duration of one full idle hue rotation
pub const DEFAULT_IDLE_CYCLE: Duration = Duration::from_secs(45);

/// Hue behavior while the table is idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleHue {
    /// Keep the last angle hue
    Hold,
    /// Rotate the hue once per `cycle`
    Drift { cycle: Duration },
}

/// Tracks the effect hue across frames
#[derive(Debug, Clone)]
pub struct HueTracker {
    idle: IdleHue,
    angle_hue: f32,
    time_hue: f32,
    was_moving: bool,
    last_update: Instant,
}

impl HueTracker {
    pub const fn new(idle: IdleHue) -> Self {
        Self {
            idle,
            angle_hue: 0.0,
            time_hue: 0.0,
            was_moving: true,
            last_update: Instant::from_ticks(0),
        }
    }

    /// Restart idle time accounting from `now`
    pub fn reset(&mut self, now: Instant) {
        self.last_update = now;
    }

    /// Advance the tracker by one frame and return the hue
    ///
    /// `degrees` must be normalized to `[0, 360)`.
    pub fn update(&mut self, degrees: f32, state: TableState, now: Instant) -> f32 {
        match state {
            TableState::Homing | TableState::Playing => {
                self.angle_hue = clamp(degrees / FULL_TURN);
                self.was_moving = true;
            }
            TableState::Sleeping => {}
            TableState::Paused | TableState::Waiting => {
                if let IdleHue::Drift { cycle } = self.idle {
                    self.drift(cycle, now);
                }
            }
        }
        self.hue()
    }

    /// Current hue in `[0, 1)`
    pub fn hue(&self) -> f32 {
        wrap_hue(self.angle_hue + self.time_hue)
    }

    pub const fn angle_hue(&self) -> f32 {
        self.angle_hue
    }

    pub const fn time_hue(&self) -> f32 {
        self.time_hue
    }

    pub const fn idle(&self) -> IdleHue {
        self.idle
    }

    #[allow(clippy::cast_precision_loss)]
    fn drift(&mut self, cycle: Duration, now: Instant) {
        // The first idle frame after motion must not jump by the time spent moving
        let elapsed = if self.was_moving {
            self.was_moving = false;
            Duration::from_ticks(0)
        } else {
            now.checked_duration_since(self.last_update)
                .unwrap_or(Duration::from_ticks(0))
        };

        let cycle_us = cycle.as_micros().max(1);
        let phase_us = elapsed.as_micros() % cycle_us;
        self.time_hue = wrap_hue(self.time_hue + phase_us as f32 / cycle_us as f32);
        self.last_update = now;
    }
}
