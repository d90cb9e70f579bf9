use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use approx::abs_diff_eq;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Tolerance used when comparing weights accumulated along a path.
const WEIGHT_EPSILON: f64 = 1e-9;

/// Weight of the combined `best` criterion: `cost + BEST_ROUTE_DURATION_FACTOR * duration`.
/// This is the exchange rate between one unit of duration and one unit of cost.
pub const BEST_ROUTE_DURATION_FACTOR: f64 = 100.0;

/// Optimization criterion of a route query.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Minimize the total monetary cost.
    Cheapest,
    /// Minimize the total travel duration.
    Quickest,
    /// Minimize the combined weight of cost and duration.
    Best,
}

/// Monetary cost of a connection, or of a whole route.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_amount(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> f64 {
        self.0
    }
}

/// Travel duration of a connection, or of a whole route, in hours.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl Duration {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    pub const fn hours(&self) -> f64 {
        self.0
    }
}

macro_rules! impl_weight {
    ($weight:ident) => {
        impl PartialEq for $weight {
            fn eq(&self, other: &Self) -> bool {
                abs_diff_eq!(self.0, other.0, epsilon = WEIGHT_EPSILON)
            }
        }

        // weights within the equality tolerance are ordered as equal
        impl PartialOrd for $weight {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self == other {
                    Some(Ordering::Equal)
                } else {
                    self.0.partial_cmp(&other.0)
                }
            }
        }

        impl Add for $weight {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $weight {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sum for $weight {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, w| acc + w)
            }
        }

        impl From<$weight> for f64 {
            fn from(weight: $weight) -> Self {
                weight.0
            }
        }

        impl fmt::Display for $weight {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_weight!(Cost);
impl_weight!(Duration);

/// Scalarization of both weights of a connection used by the `best` criterion.
pub fn combined_weight(cost: Cost, duration: Duration) -> f64 {
    cost.0 + BEST_ROUTE_DURATION_FACTOR * duration.0
}
