use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    error::{BillingError, ConfigurationError},
    quantity::percent::Percent,
};

pub const N_HOURS: usize = 24;

/// Default share of each hour's consumption covered by the solar tariff, hours 1 through 24.
const DEFAULT_PERCENTAGES: [f64; N_HOURS] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 29.0, 57.0, 79.0, 93.0, 100.0, 100.0, 93.0, 79.0, 57.0,
    21.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeEntry {
    /// Hour of day, `1..=24`.
    pub hour: u32,

    #[serde(rename = "solar_guarantee_percent")]
    pub percent: Percent,
}

impl Display for GuaranteeEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hour {}: {}", self.hour, self.percent)
    }
}

/// Solar guarantee percentage for each hour of the day.
///
/// Always covers hours 1 through 24 exactly once. The percentages themselves are not
/// guaranteed to be within `0..=100`, see [`GuaranteeCurve::validate`] and
/// [`GuaranteeCurve::clamp`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct GuaranteeCurve([Percent; N_HOURS]);

impl Default for GuaranteeCurve {
    fn default() -> Self {
        Self(DEFAULT_PERCENTAGES.map(Percent::from))
    }
}

impl GuaranteeCurve {
    /// Build the curve from `(hour, percent)` entries in any order.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = GuaranteeEntry>,
    ) -> Result<Self, ConfigurationError> {
        let mut percentages: [Option<Percent>; N_HOURS] = [None; N_HOURS];
        for entry in entries {
            let slot = Self::index(entry.hour)
                .and_then(|index| percentages.get_mut(index))
                .ok_or(ConfigurationError::HourOutOfRange(entry.hour))?;
            if slot.replace(entry.percent).is_some() {
                return Err(ConfigurationError::DuplicateHour(entry.hour));
            }
        }
        let mut curve = [Percent::ZERO; N_HOURS];
        for (hour, (slot, percent)) in (1..).zip(curve.iter_mut().zip(percentages)) {
            *slot = percent.ok_or(ConfigurationError::MissingHour(hour))?;
        }
        Ok(Self(curve))
    }

    /// Guarantee percentage of the hour, or [`None`] when the hour is outside `1..=24`.
    #[must_use]
    pub fn lookup(&self, hour: i64) -> Option<Percent> {
        Self::index(hour).map(|index| self.0[index])
    }

    /// Report every entry whose percentage lies outside `0..=100`.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        ValidationReport(self.entries().filter(|entry| !entry.percent.is_within_bounds()).collect())
    }

    /// Pull every out-of-range percentage to the nearest bound.
    pub fn clamp(&mut self) {
        for percent in &mut self.0 {
            *percent = percent.clamp_to_bounds();
        }
    }

    /// Entries in hour order.
    pub fn entries(&self) -> impl Iterator<Item = GuaranteeEntry> + '_ {
        (1..).zip(self.0).map(|(hour, percent)| GuaranteeEntry { hour, percent })
    }

    fn index(hour: impl TryInto<usize>) -> Option<usize> {
        hour.try_into().ok().filter(|hour| (1..=N_HOURS).contains(hour)).map(|hour| hour - 1)
    }
}

/// Out-of-range curve entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct ValidationReport(pub Vec<GuaranteeEntry>);

impl ValidationReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), BillingError> {
        if self.is_valid() { Ok(()) } else { Err(BillingError::Validation(self.0)) }
    }
}
