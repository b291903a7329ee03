use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        charge::{ChargedInterval, compute},
        guarantee::GuaranteeCurve,
        load::LoadInterval,
        profile::HourlyProfile,
        summary::Summary,
        tariff::Tariff,
    },
    error::BillingError,
    prelude::*,
};

/// Immutable snapshot of everything one calculation needs.
#[derive(Builder)]
pub struct Run<'a> {
    load_profile: &'a [LoadInterval],

    /// Confirmed guarantee curve.
    curve: &'a GuaranteeCurve,

    tariff: Tariff,
}

/// Every table a calculation produces.
#[must_use]
pub struct Calculation {
    /// Charged intervals in the input order.
    pub charged: Vec<ChargedInterval>,

    pub summary: Summary,
    pub hourly: HourlyProfile,
}

impl Run<'_> {
    /// Validate the curve, charge every interval, and aggregate.
    ///
    /// An out-of-range curve stops the run before anything is charged, even though it could be
    /// clamped: the clamped curve has to be confirmed first.
    #[instrument(skip_all)]
    pub fn calculate(&self) -> Result<Calculation, BillingError> {
        self.curve.validate().into_result()?;
        let charged = compute(self.load_profile, self.curve, self.tariff)?;
        let summary = Summary::aggregate(&charged);
        let hourly = charged.iter().collect();
        Ok(Calculation { charged, summary, hourly })
    }
}

impl Calculation {
    /// Charged intervals sorted by timestamp, ties kept in the input order.
    pub fn detailed(&self) -> impl Iterator<Item = &ChargedInterval> {
        self.charged.iter().sorted_by_key(|interval| interval.load.timestamp)
    }
}
