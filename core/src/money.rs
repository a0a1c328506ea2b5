//! Money value object.
//!
//! Prices are whole, currency-agnostic units. There are no fractional
//! amounts anywhere in the pricing rules, so no minor-unit scaling is done.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in whole currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero units
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Adds two amounts, saturating at the numeric bound
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies by a quantity, saturating at the numeric bound
    #[must_use]
    pub fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
