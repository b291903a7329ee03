//! CSV and JSON exports of a calculation.
//!
//! Numbers are written at full precision: rounding is left to the terminal tables.

use std::{
    fmt::Debug,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use csv::WriterBuilder;
use serde::Serialize;

use crate::{
    core::{
        charge::ChargedInterval,
        guarantee::{GuaranteeCurve, GuaranteeEntry},
        profile::HourlyConsumption,
        run::Calculation,
        summary::SummaryRow,
        tariff::Tariff,
    },
    prelude::*,
};

pub const DETAILED_FILE_NAME: &str = "detailed_charges.csv";
pub const SUMMARY_FILE_NAME: &str = "summary_charges.csv";
pub const REFERENCE_FILE_NAME: &str = "reference_data.csv";
pub const REPORT_FILE_NAME: &str = "report.json";

const DETAILED_HEADER: [&str; 10] = [
    "supply period",
    "datetime",
    "hour",
    "wesm",
    "kWh",
    "Solar Consumption (kWh)",
    "Non Solar Consumption (kWh)",
    "Solar Charge (pHp)",
    "Non Solar Charge (pHp)",
    "Total Charge (pHp)",
];

const SUMMARY_HEADER: [&str; 8] = [
    "Supply Period",
    "kWh",
    "Solar Consumption (kWh)",
    "Non Solar Consumption (kWh)",
    "Solar Charge (pHp)",
    "Non Solar Charge (pHp)",
    "Total Charge (pHp)",
    "Effective Rate (pHp/kWh)",
];

const REFERENCE_HEADER: [&str; 2] = ["Hour", "Solar Guarantee (%)"];

/// Everything the JSON report contains.
#[derive(Serialize)]
struct Report<'a> {
    tariff: Tariff,
    periods: &'a [SummaryRow],
    grand_total: &'a SummaryRow,
    hourly: &'a [HourlyConsumption],
    curve: Vec<GuaranteeEntry>,
}

/// Write all the exports into the directory, creating it when needed.
#[instrument(skip(calculation, curve, tariff))]
pub fn export_to<P: AsRef<Path> + Debug>(
    output_dir: P,
    calculation: &Calculation,
    curve: &GuaranteeCurve,
    tariff: Tariff,
    with_json: bool,
) -> Result {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    if calculation.charged.is_empty() {
        warn!("the load profile is empty, the exports contain only headers");
    }
    write_file(&output_dir.join(DETAILED_FILE_NAME), |writer| {
        write_detailed(calculation.detailed(), writer)
    })?;
    write_file(&output_dir.join(SUMMARY_FILE_NAME), |writer| {
        write_summary(calculation.summary.rows(), writer)
    })?;
    write_file(&output_dir.join(REFERENCE_FILE_NAME), |writer| write_reference(curve, writer))?;
    if with_json {
        write_file(&output_dir.join(REPORT_FILE_NAME), |writer| {
            write_report(calculation, curve, tariff, writer)
        })?;
    }
    info!(output_dir = %output_dir.display(), "exported");
    Ok(())
}

fn write_file(path: &Path, write: impl FnOnce(BufWriter<File>) -> Result) -> Result {
    let file =
        File::create(path).with_context(|| format!("failed to create `{}`", path.display()))?;
    write(BufWriter::new(file)).with_context(|| format!("failed to write `{}`", path.display()))
}

/// Charged intervals, one row each, in the iteration order.
pub fn write_detailed<'a>(
    charged: impl IntoIterator<Item = &'a ChargedInterval>,
    writer: impl Write,
) -> Result {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(DETAILED_HEADER)?;
    for interval in charged {
        let energy = &interval.energy;
        writer.write_record([
            interval.load.supply_period.clone(),
            interval.load.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            interval.load.hour.to_string(),
            interval.load.spot_price.0.to_string(),
            energy.total.0.to_string(),
            energy.solar.0.to_string(),
            energy.non_solar.0.to_string(),
            energy.solar_charge.0.to_string(),
            energy.non_solar_charge.0.to_string(),
            energy.total_charge.0.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary rows; an undefined effective rate is an empty cell.
pub fn write_summary<'a>(
    rows: impl IntoIterator<Item = &'a SummaryRow>,
    writer: impl Write,
) -> Result {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(SUMMARY_HEADER)?;
    for row in rows {
        let totals = &row.totals;
        writer.write_record([
            row.label.to_string(),
            totals.total.0.to_string(),
            totals.solar.0.to_string(),
            totals.non_solar.0.to_string(),
            totals.solar_charge.0.to_string(),
            totals.non_solar_charge.0.to_string(),
            totals.total_charge.0.to_string(),
            row.effective_rate.map(|rate| rate.0.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// The confirmed guarantee curve.
pub fn write_reference(curve: &GuaranteeCurve, writer: impl Write) -> Result {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(REFERENCE_HEADER)?;
    for entry in curve.entries() {
        writer.write_record([entry.hour.to_string(), entry.percent.0.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_report(
    calculation: &Calculation,
    curve: &GuaranteeCurve,
    tariff: Tariff,
    mut writer: impl Write,
) -> Result {
    let report = Report {
        tariff,
        periods: &calculation.summary.periods,
        grand_total: &calculation.summary.grand_total,
        hourly: &calculation.hourly.0,
        curve: curve.entries().collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;
    Ok(())
}
