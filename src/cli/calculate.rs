use std::path::PathBuf;

use clap::Parser;
use solar_as_produced::{
    core::run::Run,
    io::{export::export_to, load_profile::read_load_profile_from},
    prelude::*,
    tables::{
        build_clamp_table,
        build_curve_table,
        build_detailed_table,
        build_hourly_table,
        build_summary_table,
    },
};

use crate::cli::{curve::CurveSourceArgs, tariff::TariffArgs};

#[derive(Parser)]
pub struct CalculateArgs {
    /// Load profile CSV with the `supply period`, `datetime`, `hour`, `wesm`, and `kWh` columns.
    #[clap(env = "LOAD_PROFILE")]
    load_profile: PathBuf,

    #[clap(flatten)]
    curve: CurveSourceArgs,

    #[clap(flatten)]
    tariff: TariffArgs,

    /// Directory to write the CSV exports into.
    #[clap(long, default_value = "output", env = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Also write the JSON report.
    #[clap(long)]
    json: bool,

    /// Print the charge of every interval.
    #[clap(long)]
    show_details: bool,
}

impl CalculateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let curve = self.curve.load()?;
        println!("{}", build_curve_table(&curve));

        let report = curve.validate();
        if !report.is_valid() {
            println!("{}", build_clamp_table(&report.0));
            warn!("confirm the clamped curve with `curve --clamp` and pass it with `--curve`");
        }
        report.into_result()?;

        let tariff = self.tariff.try_into_tariff()?;
        let load_profile = read_load_profile_from(&self.load_profile)?;
        if load_profile.iter().any(|interval| interval.hour <= 0) {
            warn!("the load profile has hours below 1, expected hours are 1 to 24");
        }

        let calculation = Run::builder()
            .load_profile(&load_profile)
            .curve(&curve)
            .tariff(tariff)
            .build()
            .calculate()?;
        for error in calculation.summary.undefined_rates() {
            warn!("{error}");
        }

        if self.show_details {
            println!("{}", build_detailed_table(calculation.detailed()));
        }
        println!("{}", build_summary_table(&calculation.summary));
        println!("{}", build_hourly_table(&calculation.hourly));
        if let Some(peak) = calculation.hourly.solar_peak() {
            info!(hour = peak.hour, solar = %peak.solar, "solar peak");
        }

        export_to(&self.output_dir, &calculation, &curve, tariff, self.json)
    }
}
