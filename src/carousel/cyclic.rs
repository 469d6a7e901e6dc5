use std::{fmt, time::Duration};

use super::{Advance, ConfigError, Position, RotationConfig};

type OnChange = Box<dyn FnMut(usize) + Send + Sync>;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Repeating timer owned by a controller. Time only moves when fed through `elapse`.
#[derive(Debug, Clone)]
struct Timer {
    period: Duration,
    elapsed: Duration,
    running: bool,
}

impl Timer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    fn cancel(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Drops the time accumulated toward the next fire.
    fn rearm(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Number of whole periods that completed during `dt`.
    fn elapse(&mut self, dt: Duration) -> u128 {
        if !self.running || self.period.is_zero() {
            return 0;
        }
        let total = self.elapsed.saturating_add(dt).as_nanos();
        let period = self.period.as_nanos();
        let rest = total % period;
        // rest < period, so the seconds fit back into a Duration
        self.elapsed = Duration::new(
            (rest / NANOS_PER_SEC) as u64,
            (rest % NANOS_PER_SEC) as u32,
        );
        total / period
    }
}

/// Cursor over a fixed number of items with optional wraparound and timed advance.
pub struct CyclicIndex {
    len: usize,
    current: usize,
    looping: bool,
    timer: Timer,
    on_change: Option<OnChange>,
}

impl fmt::Debug for CyclicIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicIndex")
            .field("len", &self.len)
            .field("current", &self.current)
            .field("looping", &self.looping)
            .field("timer", &self.timer)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl CyclicIndex {
    pub fn new(len: usize, config: &RotationConfig) -> Result<Self, ConfigError> {
        if config.interval_ms < 0 {
            return Err(ConfigError::NegativeInterval(config.interval_ms));
        }
        if config.auto_advance {
            if len == 0 {
                return Err(ConfigError::EmptyAutoAdvance);
            }
            if config.interval_ms == 0 {
                return Err(ConfigError::ZeroInterval);
            }
        }
        let mut index = Self {
            len,
            current: 0,
            looping: config.looping,
            timer: Timer::new(config.period()),
            on_change: None,
        };
        index.current = index.clamp(config.initial_index);
        if config.auto_advance {
            index.timer.start();
        }
        Ok(index)
    }

    /// Controller without auto-advance. Cannot fail.
    pub fn manual(len: usize, looping: bool) -> Self {
        Self {
            len,
            current: 0,
            looping,
            timer: Timer::new(Duration::ZERO),
            on_change: None,
        }
    }

    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn set_on_change<F>(&mut self, f: F)
    where
        F: FnMut(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(f));
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn position(&self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }
        Some(Position {
            index: self.current,
            total: self.len,
        })
    }

    pub fn next(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let next = if self.current == self.len - 1 {
            if self.looping {
                0
            } else {
                self.current
            }
        } else {
            self.current + 1
        };
        self.set(next)
    }

    pub fn previous(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let prev = if self.current == 0 {
            if self.looping {
                self.len - 1
            } else {
                self.current
            }
        } else {
            self.current - 1
        };
        self.set(prev)
    }

    /// Out-of-range targets are clamped, never wrapped.
    pub fn jump_to(&mut self, index: i64) -> bool {
        if self.is_empty() {
            return false;
        }
        let index = self.clamp(index);
        self.set(index)
    }

    pub fn reset(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.set(0)
    }

    /// Starts or cancels the auto-advance timer. Starting twice is a no-op.
    pub fn set_auto_advance(&mut self, enabled: bool) -> Result<(), ConfigError> {
        if !enabled {
            self.timer.cancel();
            return Ok(());
        }
        if self.is_empty() {
            return Err(ConfigError::EmptyAutoAdvance);
        }
        if self.timer.period.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        self.timer.start();
        Ok(())
    }

    fn clamp(&self, index: i64) -> usize {
        if self.is_empty() || index <= 0 {
            return 0;
        }
        (index as u64).min(self.len as u64 - 1) as usize
    }

    fn set(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        self.current = index;
        if let Some(f) = self.on_change.as_mut() {
            f(index);
        }
        true
    }
}

impl Advance for CyclicIndex {
    fn period(&self) -> Duration {
        self.timer.period
    }

    fn auto_advance_active(&self) -> bool {
        self.timer.running
    }

    fn rearm(&mut self) {
        self.timer.rearm();
    }

    /// Replays at most two laps; a full lap on a looping list lands where it began.
    fn tick(&mut self, elapsed: Duration) -> usize {
        let fires = self.timer.elapse(elapsed);
        let len = self.len as u128;
        let steps = match fires {
            n if n <= len => n,
            n if self.looping && len > 0 => len + n % len,
            _ => len,
        };
        (0..steps).filter(|_| self.next()).count()
    }
}
