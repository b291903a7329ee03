use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, energy::KilowattHours, rate::KilowattHourRate};

pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Cost per kilowatt-hour, or [`None`] when no energy was consumed or the rate is not finite.
    #[must_use]
    pub fn checked_div(self, energy: KilowattHours) -> Option<KilowattHourRate> {
        if energy == KilowattHours::ZERO {
            return None;
        }
        Some(self / energy).filter(|rate| rate.is_finite())
    }
}

impl Div<KilowattHours> for Cost {
    type Output = KilowattHourRate;

    fn div(self, rhs: KilowattHours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ₱", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}₱", self.0)
    }
}
