use serde::Serialize;

use crate::{
    core::{guarantee::GuaranteeCurve, load::LoadInterval, period::SupplyPeriod, tariff::Tariff},
    error::BillingError,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, percent::Percent},
};

/// Load interval split into its solar and non-solar shares, with the charges of each.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ChargedInterval {
    pub load: LoadInterval,
    pub guarantee: Percent,
    pub supply_period: SupplyPeriod,
    pub energy: Allocation,
}

/// Energy and charges of one interval or of a group of intervals.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
#[must_use]
pub struct Allocation {
    #[serde(rename = "kwh")]
    pub total: KilowattHours,

    #[serde(rename = "solar_kwh")]
    pub solar: KilowattHours,

    #[serde(rename = "non_solar_kwh")]
    pub non_solar: KilowattHours,

    pub solar_charge: Cost,
    pub non_solar_charge: Cost,
    pub total_charge: Cost,
}

impl ChargedInterval {
    /// Allocate the interval between the solar and non-solar tariffs.
    ///
    /// `row` is the 1-based input row, only used to report a failed lookup.
    pub fn try_new(
        row: usize,
        load: LoadInterval,
        curve: &GuaranteeCurve,
        tariff: Tariff,
    ) -> Result<Self, BillingError> {
        let guarantee =
            curve.lookup(load.hour).ok_or(BillingError::Lookup { row, hour: load.hour })?;
        let supply_period = SupplyPeriod::containing(load.timestamp.date())?;

        let solar = load.energy * guarantee;
        let non_solar = load.energy - solar;
        let solar_charge = solar * tariff.solar();
        let non_solar_charge = non_solar * tariff.non_solar(load.spot_price);

        Ok(Self {
            supply_period,
            guarantee,
            energy: Allocation {
                total: load.energy,
                solar,
                non_solar,
                solar_charge,
                non_solar_charge,
                total_charge: solar_charge + non_solar_charge,
            },
            load,
        })
    }
}

/// Charge every load interval, preserving the input order.
///
/// Fails on the first interval whose hour is not covered by the curve: billing totals must never
/// silently omit rows.
#[instrument(skip_all, fields(n_intervals = load_profile.len()))]
pub fn compute(
    load_profile: &[LoadInterval],
    curve: &GuaranteeCurve,
    tariff: Tariff,
) -> Result<Vec<ChargedInterval>, BillingError> {
    let charged = (1..)
        .zip(load_profile)
        .map(|(row, load)| ChargedInterval::try_new(row, load.clone(), curve, tariff))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("charged all intervals");
    Ok(charged)
}
