use serde::Serialize;

use crate::{error::ConfigurationError, quantity::rate::KilowattHourRate};

/// Per-run tariff inputs, all non-negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Tariff {
    solar_rate: KilowattHourRate,
    line_rental: KilowattHourRate,
    admin_fee: KilowattHourRate,
}

#[bon::bon]
impl Tariff {
    #[builder]
    pub fn new(
        solar_rate: KilowattHourRate,
        line_rental: KilowattHourRate,
        admin_fee: KilowattHourRate,
    ) -> Result<Self, ConfigurationError> {
        for (name, value) in
            [("solar rate", solar_rate), ("line rental", line_rental), ("admin fee", admin_fee)]
        {
            if !value.is_finite() || value < KilowattHourRate::ZERO {
                return Err(ConfigurationError::InvalidTariff { name, value });
            }
        }
        Ok(Self { solar_rate, line_rental, admin_fee })
    }

    /// Rate applied to the solar share of the consumption.
    pub fn solar(self) -> KilowattHourRate {
        self.solar_rate + self.line_rental
    }

    /// Rate applied to the non-solar share of the consumption.
    pub fn non_solar(self, spot_price: KilowattHourRate) -> KilowattHourRate {
        spot_price + self.admin_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let tariff = Tariff::builder()
            .solar_rate(KilowattHourRate::from(2.0))
            .line_rental(KilowattHourRate::from(1.0))
            .admin_fee(KilowattHourRate::from(0.5))
            .build()
            .unwrap();
        assert_eq!(tariff.solar(), KilowattHourRate::from(3.0));
        assert_eq!(tariff.non_solar(KilowattHourRate::from(5.0)), KilowattHourRate::from(5.5));
        assert_eq!(tariff.non_solar(KilowattHourRate::from(-1.0)), KilowattHourRate::from(-0.5));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = Tariff::builder()
            .solar_rate(KilowattHourRate::ZERO)
            .line_rental(KilowattHourRate::from(-0.1))
            .admin_fee(KilowattHourRate::ZERO)
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidTariff { name: "line rental", .. })
        ));
    }

    #[test]
    fn test_nan_rate_rejected() {
        let result = Tariff::builder()
            .solar_rate(KilowattHourRate::from(f64::NAN))
            .line_rental(KilowattHourRate::ZERO)
            .admin_fee(KilowattHourRate::ZERO)
            .build();
        assert!(result.is_err());
    }
}
