use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[from(f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Percent(pub OrderedFloat<f64>);

impl Percent {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const HUNDRED: Self = Self(OrderedFloat(100.0));

    /// Whether the percentage lies within `0..=100`. `NaN` never does.
    #[must_use]
    pub fn is_within_bounds(self) -> bool {
        (0.0..=100.0).contains(&self.0.0)
    }

    /// Nearest percentage within `0..=100`. `NaN` is pulled down to zero.
    pub fn clamp_to_bounds(self) -> Self {
        if self.0.is_nan() { Self::ZERO } else { self.clamp(Self::ZERO, Self::HUNDRED) }
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
