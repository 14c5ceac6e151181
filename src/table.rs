//! Motion state reported by the table host

use crate::arc::normalize_degrees;

const STATE_NAME_HOMING: &str = "homing";
const STATE_NAME_PLAYING: &str = "playing";
const STATE_NAME_PAUSED: &str = "paused";
const STATE_NAME_WAITING: &str = "waiting";
const STATE_NAME_SLEEPING: &str = "sleeping";

/// Lifecycle state of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TableState {
    /// Ball is moving to its home position
    Homing,
    /// Ball is drawing a track
    Playing,
    /// Drawing is paused
    Paused,
    /// Finished a track, waiting for the next one
    #[default]
    Waiting,
    /// Table is asleep, lights fade out
    Sleeping,
}

impl TableState {
    /// Returns if the ball is moving in this state
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Homing | Self::Playing)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Homing => STATE_NAME_HOMING,
            Self::Playing => STATE_NAME_PLAYING,
            Self::Paused => STATE_NAME_PAUSED,
            Self::Waiting => STATE_NAME_WAITING,
            Self::Sleeping => STATE_NAME_SLEEPING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STATE_NAME_HOMING => Some(Self::Homing),
            STATE_NAME_PLAYING => Some(Self::Playing),
            STATE_NAME_PAUSED => Some(Self::Paused),
            STATE_NAME_WAITING => Some(Self::Waiting),
            STATE_NAME_SLEEPING => Some(Self::Sleeping),
            _ => None,
        }
    }
}

/// Values shared between the table host and the effect for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableValues {
    /// Ball angle in radians
    pub theta: f32,
    /// Ball radius, 0.0 at the center and 1.0 at the rim
    pub rho: f32,
    /// Table lifecycle state
    pub state: TableState,
    /// Primary color selected on the table (0xWWRRGGBB)
    pub primary_color: u32,
    /// Set by the effect when the strip should be refreshed
    pub do_update: bool,
}

impl TableValues {
    pub const fn new(theta: f32, rho: f32, state: TableState) -> Self {
        Self {
            theta,
            rho,
            state,
            primary_color: 0,
            do_update: false,
        }
    }

    /// Ball angle in degrees, normalized to `[0, 360)`
    pub fn degrees(&self) -> f32 {
        normalize_degrees(self.theta.to_degrees())
    }
}
