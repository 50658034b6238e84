//! Decorative audio-spectrum bars.

use crate::source::RandomSource;
use serde::{Deserialize, Serialize};

/// Default number of bars.
pub const WAVE_POINTS: usize = 52;

pub const SPECTRUM_MIN: f64 = 0.15;
pub const SPECTRUM_MAX: f64 = 1.0;

/// Drift phase speed: one radian every 520 ms.
const DRIFT_PERIOD_MS: f64 = 520.0;

/// Bar magnitudes, always within `[SPECTRUM_MIN, SPECTRUM_MAX]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Spectrum {
    values: Vec<f64>,
}

impl Spectrum {
    /// `len` bars with random starting heights.
    pub fn new(len: usize, rng: &mut impl RandomSource) -> Self {
        let values = (0..len).map(|_| clamp(rng.next_f64())).collect();
        Self { values }
    }

    /// Blend every bar towards fresh noise plus a slow sine drift.
    pub fn tick(&mut self, now_millis: i64, rng: &mut impl RandomSource) {
        let phase = now_millis as f64 / DRIFT_PERIOD_MS;

        for (index, value) in self.values.iter_mut().enumerate() {
            let drift = (phase + index as f64).sin() * 0.25;
            let base = rng.next_f64() * 0.85 + 0.15;
            *value = clamp(*value * 0.6 + base * 0.4 + drift * 0.1);
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Height in pixels of bar `index` at the page's scale (10..=100).
    pub fn bar_height(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().map(height_px)
    }
}

/// Pixel height of a bar with magnitude `value`.
pub fn height_px(value: f64) -> f64 {
    value * 90.0 + 10.0
}

fn clamp(value: f64) -> f64 {
    value.clamp(SPECTRUM_MIN, SPECTRUM_MAX)
}
