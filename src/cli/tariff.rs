//! Tariff CLI arguments.

use clap::Parser;
use solar_as_produced::{core::tariff::Tariff, prelude::*, quantity::rate::KilowattHourRate};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct TariffArgs {
    /// Fixed solar rate per kilowatt-hour.
    #[clap(long = "solar-rate", default_value = "0.0", env = "SOLAR_RATE")]
    pub solar_rate: KilowattHourRate,

    /// Line rental per kilowatt-hour, added to the solar rate.
    #[clap(long = "line-rental", default_value = "0.0", env = "LINE_RENTAL")]
    pub line_rental: KilowattHourRate,

    /// Administration fee per kilowatt-hour, added to the spot price.
    #[clap(long = "admin-fee", default_value = "0.0", env = "ADMIN_FEE")]
    pub admin_fee: KilowattHourRate,
}

impl TariffArgs {
    pub fn try_into_tariff(self) -> Result<Tariff> {
        let tariff = Tariff::builder()
            .solar_rate(self.solar_rate)
            .line_rental(self.line_rental)
            .admin_fee(self.admin_fee)
            .build()?;
        info!(
            solar_rate = %self.solar_rate,
            line_rental = %self.line_rental,
            admin_fee = %self.admin_fee,
            "tariff",
        );
        Ok(tariff)
    }
}
