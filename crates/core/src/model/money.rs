use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Monetary amount in integer cents.
///
/// Every amount that enters aggregation is converted to `Cents` first, so
/// donations (reported in cents) and pledges/adjustments (reported in whole
/// currency units) are never mixed in arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts an amount in whole currency units (e.g. `12.5` dollars).
    ///
    /// Rounds to the nearest cent. Non-finite input maps to zero and values
    /// beyond the `i64` range saturate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_units(units: f64) -> Self {
        if !units.is_finite() {
            return Self::ZERO;
        }
        // `as` saturates for out-of-range floats.
        Self((units * 100.0).round() as i64)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The amount in whole currency units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
