//! Injectable randomness and wall-clock sources.
//!
//! Everything random in the conversation (vibes, reply delays, phrase picks,
//! spectrum noise) and everything time-dependent (timestamps, spectrum drift)
//! goes through these traits so tests can pin them down.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Randomness backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values in a loop.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`. An empty script always yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: 0,
        }
    }

    /// Always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

// ============================================================================
// Clocks
// ============================================================================

/// Wall-clock access.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Local wall-clock time, used for message timestamps.
    fn local_time(&self) -> NaiveDateTime;
}

/// The real system clock, in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep a handle while the
/// conversation owns another. Local time is the UTC reading of the epoch value.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, by: Duration) {
        self.millis.set(self.millis.get() + by.as_millis() as i64);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn local_time(&self) -> NaiveDateTime {
        DateTime::<Utc>::from_timestamp_millis(self.millis.get())
            .unwrap_or_default()
            .naive_utc()
    }
}

/// Format a wall-clock time the way es-ES does for two-digit hour and minute.
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_std_random_in_unit_range() {
        let mut rng = StdRandom::from_entropy();
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRandom::new([0.1, 0.2]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.2);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_clamps_to_unit_range() {
        let mut rng = ScriptedRandom::new([1.0, -3.0]);
        assert!(rng.next_f64() < 1.0);
        assert_eq!(rng.next_f64(), 0.0);
    }

    #[test]
    fn test_pick_bounds() {
        let mut rng = ScriptedRandom::new([0.0, 0.999_999, 0.5]);
        assert_eq!(rng.pick(5), 0);
        assert_eq!(rng.pick(5), 4);
        assert_eq!(rng.pick(4), 2);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn test_range() {
        let mut rng = ScriptedRandom::new([0.0, 0.5]);
        assert_eq!(rng.range(1000.0, 2200.0), 1000.0);
        assert_eq!(rng.range(1000.0, 2200.0), 1600.0);
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::at_millis(0);
        let handle = clock.clone();
        handle.advance(Duration::from_secs(3600 * 13 + 60 * 7));

        assert_eq!(clock.now_millis(), 47_220_000);
        assert_eq!(format_timestamp(&clock.local_time()), "13:07");
    }

    #[test]
    fn test_format_timestamp_pads() {
        let clock = ManualClock::at_millis(60_000 * 5);
        assert_eq!(format_timestamp(&clock.local_time()), "00:05");
    }
}
