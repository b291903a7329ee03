use std::fmt::{Debug, Display, Formatter};

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::ConfigurationError;

/// First day of a supply period.
const START_DAY: u32 = 26;

/// Last day of a supply period.
const END_DAY: u32 = 25;

/// Billing cycle running from the 26th of one month through the 25th of the next, inclusive.
///
/// Ordered chronologically by its end date.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct SupplyPeriod {
    /// Inclusive, always the 25th.
    pub end: NaiveDate,

    /// Inclusive, always the 26th of the month preceding [`SupplyPeriod::end`].
    pub start: NaiveDate,
}

impl SupplyPeriod {
    /// Resolve the supply period the date falls into.
    ///
    /// Fails when the period would end past the last date `chrono` can represent.
    pub fn containing(date: NaiveDate) -> Result<Self, ConfigurationError> {
        let end = if date.day() >= START_DAY {
            // The 26th exists in every month, but the month after may be shorter:
            // adding a month clamps to its last day, which is still past the 25th.
            date.checked_add_months(Months::new(1)).and_then(|next_month| {
                next_month.checked_sub_days(Days::new(u64::from(next_month.day() - END_DAY)))
            })
        } else {
            date.checked_add_days(Days::new(u64::from(END_DAY - date.day())))
        };
        let end = end.ok_or(ConfigurationError::DateOutOfRange(date))?;
        let start = end
            .checked_sub_months(Months::new(1))
            .and_then(|start| start.checked_add_days(Days::new(1)))
            .ok_or(ConfigurationError::DateOutOfRange(date))?;
        Ok(Self { end, start })
    }

    /// Abbreviated month and year of the end date, for example `Jan-24`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start <= date) && (date <= self.end)
    }
}

impl Display for SupplyPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.end.format("%b-%y"))
    }
}

impl Debug for SupplyPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl Serialize for SupplyPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
