//! Injectable randomness.
//!
//! Every randomized rule (encounter roll, damage rolls, escape roll, loot
//! choice, experience reward) draws from a [`RandomSource`]. Production code
//! uses a seeded [`StdRng`]; tests can use [`ScriptedRandom`] to force exact
//! values.

use rand::Rng;
use rand::rngs::StdRng;

/// A sequential source of random values.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform integer in `low..=high`. Returns `low` if `high < low`.
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// A uniform index in `0..len`. Returns 0 if `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn roll(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.random_range(0..len)
    }
}

/// A deterministic source that replays a fixed list of unit values.
///
/// Each draw consumes the next value, cycling when the list is exhausted.
/// Integer draws map the value onto the requested range the same way a
/// uniform sampler would: `roll(low, high)` yields `low + floor(v * span)`
/// and `pick(len)` yields `floor(v * len)`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source from a sequence of values. Values are clamped into
    /// `[0, 1)`; an empty sequence always yields 0.0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, LARGEST_BELOW_ONE))
            .collect();
        Self { values, cursor: 0 }
    }

    /// The unit value that makes `roll(low, high)` return exactly `value`.
    ///
    /// Handy for scripting damage rolls in tests. A range with
    /// `high <= low` always rolls `low`, so any value works and 0.0 is
    /// returned.
    pub fn value_for(low: u32, high: u32, value: u32) -> f64 {
        if high <= low {
            return 0.0;
        }
        let span = f64::from(high.saturating_sub(low)) + 1.0;
        let offset = f64::from(value.clamp(low, high) - low);
        (offset + 0.5) / span
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_value(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON;

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.next_value()
    }

    fn roll(&mut self, low: u32, high: u32) -> u32 {
        let v = self.next_value();
        if high <= low {
            return low;
        }
        let span = f64::from(high - low) + 1.0;
        let offset = (v * span).floor() as u32;
        low + offset.min(high - low)
    }

    fn pick(&mut self, len: usize) -> usize {
        let v = self.next_value();
        if len == 0 {
            return 0;
        }
        ((v * len as f64).floor() as usize).min(len - 1)
    }
}
