use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use serde::{Serialize, Serializer};

use crate::{
    core::{
        charge::{Allocation, ChargedInterval},
        period::SupplyPeriod,
    },
    error::BillingError,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

pub const GRAND_TOTAL: &str = "Grand Total";

/// Charges aggregated per supply period, in chronological order, and over the whole profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Summary {
    pub periods: Vec<SummaryRow>,
    pub grand_total: SummaryRow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct SummaryRow {
    #[serde(rename = "supply_period")]
    pub label: SummaryLabel,

    #[serde(flatten)]
    pub totals: Allocation,

    /// Total charge per kilowatt-hour, [`None`] when no energy was consumed.
    pub effective_rate: Option<KilowattHourRate>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SummaryLabel {
    Period(SupplyPeriod),
    GrandTotal,
}

impl Display for SummaryLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Period(period) => Display::fmt(period, f),
            Self::GrandTotal => f.write_str(GRAND_TOTAL),
        }
    }
}

impl Serialize for SummaryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl SummaryRow {
    fn new(label: SummaryLabel, totals: Allocation) -> Self {
        Self { label, totals, effective_rate: totals.total_charge.checked_div(totals.total) }
    }

    /// Effective rate, or [`BillingError::DivisionUndefined`] for a zero-energy row.
    pub fn try_effective_rate(&self) -> Result<KilowattHourRate, BillingError> {
        self.effective_rate
            .ok_or_else(|| BillingError::DivisionUndefined { period: self.label.to_string() })
    }
}

impl Summary {
    /// Group the charged intervals by supply period and append the grand total.
    #[instrument(skip_all)]
    pub fn aggregate<'a>(charged: impl IntoIterator<Item = &'a ChargedInterval>) -> Self {
        // The map orders the periods by their end dates.
        let mut totals: BTreeMap<SupplyPeriod, Allocation> = BTreeMap::new();
        for interval in charged {
            *totals.entry(interval.supply_period).or_default() += interval.energy;
        }
        let periods = totals
            .into_iter()
            .map(|(period, totals)| SummaryRow::new(SummaryLabel::Period(period), totals))
            .collect::<Vec<_>>();
        let grand_total = SummaryRow::new(
            SummaryLabel::GrandTotal,
            periods.iter().map(|row| row.totals).sum(),
        );
        info!(
            n_periods = periods.len(),
            total_charge = %grand_total.totals.total_charge,
            "aggregated",
        );
        Self { periods, grand_total }
    }

    /// Period rows followed by the grand total.
    pub fn rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.periods.iter().chain(std::iter::once(&self.grand_total))
    }

    /// Rows whose effective rate is undefined.
    pub fn undefined_rates(&self) -> impl Iterator<Item = BillingError> + '_ {
        self.rows().filter_map(|row| row.try_effective_rate().err())
    }
}
