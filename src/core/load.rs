use chrono::NaiveDateTime;

use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

/// One metered interval of the load profile.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadInterval {
    /// Supply period label as given in the input, kept for display only.
    pub supply_period: String,

    pub timestamp: NaiveDateTime,

    /// Hour of day as given in the input, `1..=24` when well-formed.
    pub hour: i64,

    /// Spot market («WESM») price.
    pub spot_price: KilowattHourRate,

    pub energy: KilowattHours,
}
