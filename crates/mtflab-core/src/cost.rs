//! Cost - Additive access-cost value

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// The cost of one access, or the additive total of a run.
///
/// A single access costs its 1-based position in the list immediately
/// before the access, so a per-access cost is always at least 1 and at
/// most the number of tracked elements.
///
/// # Examples
///
/// ```
/// use mtflab_core::Cost;
///
/// let first = Cost::of(4);
/// let rest: Cost = std::iter::repeat(Cost::ONE).take(19).sum();
///
/// assert_eq!(first + rest, Cost::of(23));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    value: u64,
}

impl Cost {
    /// The zero cost (total of an empty run).
    pub const ZERO: Cost = Cost { value: 0 };

    /// A cost of 1, the cheapest possible access.
    pub const ONE: Cost = Cost { value: 1 };

    /// Creates a new Cost with the given value.
    #[inline]
    pub const fn of(value: u64) -> Self {
        Cost { value }
    }

    /// Returns the cost value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Ratio of this cost to another, for competitive comparisons.
    ///
    /// Returns `None` when `other` is zero.
    pub fn ratio_to(&self, other: Cost) -> Option<f64> {
        if other.value == 0 {
            None
        } else {
            Some(self.value as f64 / other.value as f64)
        }
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost::of(self.value + other.value)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost::of(self.value - other.value)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cost({})", self.value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
