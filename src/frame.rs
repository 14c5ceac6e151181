//! Frame outcome reporting

use core::fmt;

use heapless::HistoryBuffer;

/// Number of recent skip causes kept by [`FrameStats`]
pub const SKIP_HISTORY_SIZE: usize = 8;

/// Reason a frame was skipped
///
/// A skipped frame leaves the strip and the effect state untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameError {
    /// The strip reports no pixels
    EmptyStrip,
    /// Ball angle is not a finite number
    InvalidTheta(f32),
    /// Ball radius is not a finite number
    InvalidRho(f32),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "strip has no pixels"),
            Self::InvalidTheta(theta) => write!(f, "invalid theta: {}", theta),
            Self::InvalidRho(rho) => write!(f, "invalid rho: {}", rho),
        }
    }
}

/// Counters of rendered and skipped frames
#[derive(Debug, Clone)]
pub struct FrameStats {
    rendered: u32,
    skipped: u32,
    recent_skips: HistoryBuffer<FrameError, SKIP_HISTORY_SIZE>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            rendered: 0,
            skipped: 0,
            recent_skips: HistoryBuffer::new(),
        }
    }

    pub(crate) fn record_rendered(&mut self) {
        self.rendered = self.rendered.saturating_add(1);
    }

    pub(crate) fn record_skipped(&mut self, error: FrameError) {
        self.skipped = self.skipped.saturating_add(1);
        self.recent_skips.write(error);
    }

    /// Number of frames rendered, sleeping frames included
    pub const fn rendered(&self) -> u32 {
        self.rendered
    }

    /// Number of skipped frames
    pub const fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Cause of the most recent skipped frame
    pub fn last_skip(&self) -> Option<FrameError> {
        self.recent_skips.recent().copied()
    }

    /// Recent skip causes, oldest first
    pub fn recent_skips(&self) -> impl Iterator<Item = &FrameError> {
        self.recent_skips.oldest_ordered()
    }
}
