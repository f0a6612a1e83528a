//! Frame timing
//!
//! The frame loop needs one number per iteration: milliseconds elapsed since
//! the previous iteration. [`FrameClock`] owns that contract; [`TimeSource`]
//! abstracts where timestamps come from so the loop can be driven by fake
//! time in tests.

use std::time::Instant;

/// Source of monotonically increasing timestamps in milliseconds.
pub trait TimeSource {
    /// Milliseconds elapsed since some fixed origin.
    fn now_millis(&mut self) -> u64;
}

/// Wall-clock time source backed by [`Instant`].
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    /// Create a time source whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now_millis(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Per-frame elapsed-time tracker.
///
/// The first tick after construction or [`reset`](Self::reset) establishes
/// the baseline and returns 0, so a long setup phase never produces a huge
/// spurious delta on frame one.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_timestamp: Option<u64>,
}

impl FrameClock {
    /// Create a clock with no baseline sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
        }
    }

    /// Record `now_millis` and return the milliseconds elapsed since the
    /// previous tick.
    ///
    /// Returns 0 on the first call. A timestamp earlier than the previous
    /// one clamps to 0; the anomaly is logged and the new timestamp becomes
    /// the baseline for the next frame.
    pub fn tick(&mut self, now_millis: u64) -> u64 {
        let elapsed = match self.last_timestamp {
            None => 0,
            Some(last) if now_millis < last => {
                log::warn!(
                    "time source went backwards ({now_millis} < {last}), clamping frame delta to 0"
                );
                0
            }
            Some(last) => now_millis - last,
        };
        self.last_timestamp = Some(now_millis);
        elapsed
    }

    /// Forget the baseline; the next tick returns 0 again.
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12_345), 0);
    }

    #[test]
    fn test_second_tick_returns_difference() {
        let mut clock = FrameClock::new();
        clock.tick(1_000);
        assert_eq!(clock.tick(1_016), 16);
        assert_eq!(clock.tick(1_049), 33);
    }

    #[test]
    fn test_backwards_time_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.tick(1_000);
        assert_eq!(clock.tick(900), 0);
        // The anomalous sample still becomes the new baseline
        assert_eq!(clock.tick(950), 50);
    }

    #[test]
    fn test_reset_restores_first_call_behavior() {
        let mut clock = FrameClock::new();
        clock.tick(1_000);
        clock.tick(1_016);
        clock.reset();
        assert_eq!(clock.tick(5_000), 0);
        assert_eq!(clock.tick(5_020), 20);
    }

    #[test]
    fn test_monotonic_time_source_advances() {
        let mut time = MonotonicTime::new();
        let a = time.now_millis();
        let b = time.now_millis();
        assert!(b >= a);
    }
}
