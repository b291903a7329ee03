mod calculate;
mod curve;
mod period;
mod tariff;

use clap::{Parser, Subcommand};
use solar_as_produced::prelude::*;

use crate::cli::{calculate::CalculateArgs, curve::CurveArgs, period::PeriodArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: charge the load profile and export the results.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Inspect, clamp, or initialise the solar guarantee curve.
    #[clap(name = "curve")]
    Curve(CurveArgs),

    /// Resolve dates to their supply periods.
    #[clap(name = "period")]
    Period(PeriodArgs),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Calculate(args) => args.run(),
            Self::Curve(args) => args.run(),
            Self::Period(args) => args.run(),
        }
    }
}
