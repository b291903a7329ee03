use std::{cmp::Reverse, collections::BTreeMap};

use serde::Serialize;

use crate::{core::charge::ChargedInterval, quantity::energy::KilowattHours};

/// Consumption per hour of day, split into the solar and non-solar shares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct HourlyProfile(pub Vec<HourlyConsumption>);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HourlyConsumption {
    pub hour: i64,

    #[serde(rename = "kwh")]
    pub total: KilowattHours,

    #[serde(rename = "solar_kwh")]
    pub solar: KilowattHours,

    #[serde(rename = "non_solar_kwh")]
    pub non_solar: KilowattHours,
}

impl<'a> FromIterator<&'a ChargedInterval> for HourlyProfile {
    fn from_iter<T: IntoIterator<Item = &'a ChargedInterval>>(iterator: T) -> Self {
        let mut hours: BTreeMap<i64, (KilowattHours, KilowattHours)> = BTreeMap::new();
        for interval in iterator {
            let (total, solar) = hours.entry(interval.load.hour).or_default();
            *total += interval.energy.total;
            *solar += interval.energy.solar;
        }
        Self(
            hours
                .into_iter()
                .map(|(hour, (total, solar))| HourlyConsumption {
                    hour,
                    total,
                    solar,
                    non_solar: total - solar,
                })
                .collect(),
        )
    }
}

impl HourlyProfile {
    /// Hour with the largest solar consumption, the earliest one on ties.
    ///
    /// [`None`] when no solar energy was consumed at all.
    #[must_use]
    pub fn solar_peak(&self) -> Option<&HourlyConsumption> {
        self.0
            .iter()
            .filter(|hour| hour.solar > KilowattHours::ZERO)
            .min_by_key(|hour| Reverse(hour.solar))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::{guarantee::GuaranteeCurve, load::LoadInterval, tariff::Tariff},
        quantity::rate::KilowattHourRate,
    };

    fn charged(day: u32, hour: u32, energy: f64) -> ChargedInterval {
        let load = LoadInterval {
            supply_period: String::new(),
            timestamp: NaiveDate::from_ymd_opt(2024, 5, day).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            hour: hour.into(),
            spot_price: KilowattHourRate::ZERO,
            energy: KilowattHours::from(energy),
        };
        let tariff = Tariff::builder()
            .solar_rate(KilowattHourRate::ZERO)
            .line_rental(KilowattHourRate::ZERO)
            .admin_fee(KilowattHourRate::ZERO)
            .build()
            .unwrap();
        ChargedInterval::try_new(1, load, &GuaranteeCurve::default(), tariff).unwrap()
    }

    #[test]
    fn test_groups_by_hour() {
        let intervals =
            [charged(1, 9, 2.0), charged(2, 9, 3.0), charged(1, 1, 4.0), charged(3, 12, 1.0)];
        let profile: HourlyProfile = intervals.iter().collect();

        let hours = profile.0.iter().map(|hour| hour.hour).collect::<Vec<_>>();
        assert_eq!(hours, [1, 9, 12]);

        let nine = &profile.0[1];
        assert_abs_diff_eq!(nine.total.0.0, 5.0);
        assert_abs_diff_eq!(nine.solar.0.0, 2.85, epsilon = 1e-12);
        assert_abs_diff_eq!(nine.non_solar.0.0, 2.15, epsilon = 1e-12);

        assert_eq!(profile.solar_peak().map(|hour| hour.hour), Some(9));
    }

    #[test]
    fn test_no_solar_peak_at_night() {
        let profile: HourlyProfile = [charged(1, 2, 1.0)].iter().collect();
        assert!(profile.solar_peak().is_none());
    }
}
