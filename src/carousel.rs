mod cyclic;
mod presenter;

pub use cyclic::CyclicIndex;
pub use presenter::{Carousel, CarouselView, Slide};

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

static DEFAULT_INTERVAL_MS: i64 = 2000;

/// Behavior of one rotating widget, as written in the portfolio content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    #[serde(rename = "loop")]
    pub looping: bool,
    pub auto_advance: bool,
    pub interval_ms: i64,
    pub initial_index: i64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            looping: true,
            auto_advance: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            initial_index: 0,
        }
    }
}

impl RotationConfig {
    pub fn auto(interval_ms: i64) -> Self {
        Self {
            auto_advance: true,
            interval_ms,
            ..Self::default()
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(0) as u64)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rotation interval must not be negative (got {0}ms)")]
    NegativeInterval(i64),
    #[error("auto-advance needs a non-zero interval")]
    ZeroInterval,
    #[error("auto-advance needs at least one item")]
    EmptyAutoAdvance,
}

/// 1-based position of a selection, rendered as `"3 / 8"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

impl Position {
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.ordinal(), self.total)
    }
}

/// Anything an interval can drive forward.
pub trait Advance {
    fn period(&self) -> Duration;
    fn auto_advance_active(&self) -> bool;
    /// Restarts the current period, after a manual transition.
    fn rearm(&mut self);
    /// Feeds elapsed time, returns the number of accepted transitions.
    fn tick(&mut self, elapsed: Duration) -> usize;
}
