use crate::prelude::{Real, Result, RiskError};
use getset::CopyGetters;

/// Piecewise-constant lookup by ordered breakpoints.
///
/// A table with breakpoints `[b0, b1, ..., bn]` holds one bucket per interval
/// between consecutive breakpoints. A value is assigned to the bucket of the
/// last breakpoint it strictly exceeds, so a value that sits exactly on an
/// inner breakpoint stays in the lower bucket. The first breakpoint itself
/// belongs to the first bucket and the last breakpoint is only a ceiling:
/// anything at or above it maps to the final bucket.
#[derive(CopyGetters, Debug, PartialEq, Copy, Clone)]
#[getset(get_copy = "pub")]
pub struct ThresholdTable {
    breakpoints: &'static [Real],
    buckets: &'static [Real],
}

impl ThresholdTable {
    /// Create a new table, checking that breakpoints are strictly increasing
    /// and that there is exactly one bucket per interval.
    pub fn new(breakpoints: &'static [Real], buckets: &'static [Real]) -> Result<Self> {
        let table = ThresholdTable::new_unchecked(breakpoints, buckets);
        table.validate()?;
        Ok(table)
    }

    /// Create table without validation. Used for the built-in literature
    /// tables, which are checked by tests.
    pub(crate) const fn new_unchecked(
        breakpoints: &'static [Real],
        buckets: &'static [Real],
    ) -> Self {
        ThresholdTable {
            breakpoints,
            buckets,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.buckets.is_empty() || self.breakpoints.len() != self.buckets.len() + 1 {
            return Err(RiskError::configuration(format!(
                "expected {} breakpoints for {} buckets, got {}",
                self.buckets.len() + 1,
                self.buckets.len(),
                self.breakpoints.len()
            )));
        }
        if self.breakpoints.iter().any(|b| b.is_nan()) {
            return Err(RiskError::configuration("breakpoints must not be NaN"));
        }
        if self.breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RiskError::configuration(
                "breakpoints must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Index of the bucket that holds value.
    pub fn bucket_index(&self, value: Real) -> Result<usize> {
        let lower = self.breakpoints[0];
        if value.is_nan() || value < lower {
            return Err(RiskError::domain("table key", value));
        }
        let above = self.breakpoints.iter().filter(|&&b| value > b).count();
        Ok(above.saturating_sub(1).min(self.buckets.len() - 1))
    }

    /// Return the bucket value for the given key.
    pub fn lookup(&self, value: Real) -> Result<Real> {
        Ok(self.buckets[self.bucket_index(value)?])
    }
}
