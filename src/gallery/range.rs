//! Discrete steps for continuous range controls.
//!
//! A range `[min, max]` gets a coarse `step` (five increments, used by stepped buttons) and a finer
//! `slider_step` (about 35 increments, never below 0.01, used while dragging).

use crate::foundation::error::{EditorError, EditorResult};

const COARSE_DIVISIONS: f64 = 5.0;
const SLIDER_DIVISIONS: f64 = 35.0;
const MIN_SLIDER_STEP: f64 = 0.01;

/// Round to two decimals, halves away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Inclusive numeric bounds of a range control.
pub struct RangeConfig {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl RangeConfig {
    /// Build a validated range.
    pub fn new(min: f64, max: f64) -> EditorResult<Self> {
        let r = Self { min, max };
        r.validate()?;
        Ok(r)
    }

    /// Bounds must be finite with `min < max`, and the coarse step must not round to zero.
    pub fn validate(&self) -> EditorResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EditorError::validation("range bounds must be finite"));
        }
        if self.min >= self.max {
            return Err(EditorError::validation(format!(
                "range min ({}) must be < max ({})",
                self.min, self.max
            )));
        }
        if round2(self.span() / COARSE_DIVISIONS) <= 0.0 {
            return Err(EditorError::validation(format!(
                "range [{}, {}] is too narrow for two-decimal steps",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Compute coarse/slider steps for this range.
    pub fn quantize(&self) -> RangeSteps {
        let span = self.span();
        RangeSteps {
            min: self.min,
            max: self.max,
            step: round2(span / COARSE_DIVISIONS),
            slider_step: round2(span / SLIDER_DIVISIONS).max(MIN_SLIDER_STEP),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Range bounds together with their derived step sizes.
pub struct RangeSteps {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Coarse increment.
    pub step: f64,
    /// Fine increment for continuous dragging.
    pub slider_step: f64,
}

impl RangeSteps {
    /// Coarse values from `min` to `max` inclusive.
    ///
    /// The iterator is `Clone`, so the sequence can be replayed. The final value is exactly `max`
    /// no matter how the intermediate sums drift.
    pub fn values(&self) -> SteppedValues {
        let count = if self.step > 0.0 {
            // Tolerate float noise so an exact multiple does not grow an extra step.
            ((self.max - self.min) / self.step - 1e-9).ceil().max(1.0) as usize
        } else {
            1
        };
        SteppedValues {
            min: self.min,
            max: self.max,
            step: self.step,
            count,
            next: 0,
        }
    }
}

/// Iterator over the coarse values of a [`RangeSteps`].
#[derive(Clone, Debug)]
pub struct SteppedValues {
    min: f64,
    max: f64,
    step: f64,
    count: usize,
    next: usize,
}

impl Iterator for SteppedValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;
        if i == self.count {
            Some(self.max)
        } else {
            Some(round2(self.min + self.step * i as f64))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SteppedValues {}

#[cfg(test)]
#[path = "../../tests/unit/gallery/range.rs"]
mod tests;
