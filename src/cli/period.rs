use chrono::NaiveDate;
use clap::Parser;
use solar_as_produced::{core::period::SupplyPeriod, prelude::*, tables::build_period_table};

#[derive(Parser)]
pub struct PeriodArgs {
    /// Dates in the `YYYY-MM-DD` format.
    #[clap(required = true)]
    dates: Vec<NaiveDate>,
}

impl PeriodArgs {
    pub fn run(self) -> Result {
        let periods = self
            .dates
            .into_iter()
            .map(|date| Ok((date, SupplyPeriod::containing(date)?)))
            .collect::<Result<Vec<_>>>()?;
        println!("{}", build_period_table(&periods));
        Ok(())
    }
}
