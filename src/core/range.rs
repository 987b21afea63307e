use serde::{Deserialize, Serialize};

/// Axis a range is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Numeric axis domain handed to the rendering layer.
///
/// `None` on an end means the renderer should autoscale that end. A fully
/// undefined range is a legitimate answer (e.g. a cohort without any data),
/// not a zero-width domain.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    pub const UNDEFINED: Self = Self {
        min: None,
        max: None,
    };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        self.bounds().is_some()
    }

    #[must_use]
    pub fn is_undefined(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn span(self) -> Option<f64> {
        self.bounds().map(|(min, max)| (max - min).abs())
    }

    /// Expands both ends by `ratio * |max - min|`.
    ///
    /// Partially defined ranges are returned unchanged.
    #[must_use]
    pub fn padded_by_ratio(self, ratio: f64) -> Self {
        match self.bounds() {
            Some((min, max)) => {
                let pad = ratio * (max - min).abs();
                Self::new(min - pad, max + pad)
            }
            None => self,
        }
    }

    /// Widens a degenerate `min == max` range to `{min - amount, max + amount}`.
    #[must_use]
    pub fn widened_if_zero_width(self, amount: f64) -> Self {
        match self.bounds() {
            Some((min, max)) if min == max => Self::new(min - amount, max + amount),
            _ => self,
        }
    }
}

/// Optional-range fold.
///
/// "No value" combined with "some value" yields that value; two values
/// combine elementwise (lesser min, greater max). Non-finite samples are
/// ignored so a finished range always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeAccumulator {
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn push_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = Some(self.min.map_or(value, |current| current.min(value)));
        self.max = Some(self.max.map_or(value, |current| current.max(value)));
    }

    /// Folds both ends as plain values, so an inverted pair still widens the
    /// range instead of flipping it.
    pub fn push_bounds(&mut self, first: f64, second: f64) {
        self.push_value(first);
        self.push_value(second);
    }

    pub fn push_range(&mut self, range: AxisRange) {
        if let Some(min) = range.min.filter(|value| value.is_finite()) {
            self.min = Some(self.min.map_or(min, |current| current.min(min)));
        }
        if let Some(max) = range.max.filter(|value| value.is_finite()) {
            self.max = Some(self.max.map_or(max, |current| current.max(max)));
        }
    }

    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        self.push_range(other.into_range());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `None` when nothing was folded in.
    #[must_use]
    pub fn finish(self) -> Option<AxisRange> {
        if self.is_empty() {
            None
        } else {
            Some(self.into_range())
        }
    }

    #[must_use]
    pub fn into_range(self) -> AxisRange {
        AxisRange {
            min: self.min,
            max: self.max,
        }
    }
}

impl Extend<f64> for RangeAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push_value(value);
        }
    }
}

impl FromIterator<f64> for RangeAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl FromIterator<AxisRange> for RangeAccumulator {
    fn from_iter<I: IntoIterator<Item = AxisRange>>(iter: I) -> Self {
        let mut acc = Self::new();
        for range in iter {
            acc.push_range(range);
        }
        acc
    }
}
