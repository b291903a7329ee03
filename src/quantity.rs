pub mod cost;
pub mod energy;
pub mod percent;
pub mod rate;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Physical or monetary value tagged with its dimensions.
///
/// The dimensions are exponents: energy is `<1, 1, 0>` (power × time), cost is `<0, 0, 1>`,
/// and a per-kilowatt-hour rate is `<-1, -1, 1>`.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Default
    for Quantity<POWER, TIME, COST>
{
    fn default() -> Self {
        Self::ZERO
    }
}
