//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::{fmt::Write, path::PathBuf};

use solar_as_produced::{
    core::{
        guarantee::GuaranteeCurve,
        load::LoadInterval,
        run::{Calculation, Run},
        tariff::Tariff,
    },
    io::load_profile::read_load_profile,
    quantity::rate::KilowattHourRate,
};

pub const HEADER: &str = "supply period,datetime,hour,wesm,kWh";

/// Solar rate 2, line rental 1, admin fee 0.5.
pub fn tariff() -> Tariff {
    Tariff::builder()
        .solar_rate(KilowattHourRate::from(2.0))
        .line_rental(KilowattHourRate::from(1.0))
        .admin_fee(KilowattHourRate::from(0.5))
        .build()
        .unwrap()
}

/// One day of 24 hourly rows, 10 kWh each at a spot price of 5.
pub fn flat_day_csv(date: &str) -> String {
    let mut csv = format!("{HEADER}\n");
    for hour in 1..=24 {
        writeln!(csv, "Jan-24,{date} {:02}:00:00,{hour},5,10", hour - 1).unwrap();
    }
    csv
}

pub fn load_profile(csv: &str) -> Vec<LoadInterval> {
    read_load_profile(csv.as_bytes()).unwrap()
}

pub fn calculate(load_profile: &[LoadInterval]) -> Calculation {
    Run::builder()
        .load_profile(load_profile)
        .curve(&GuaranteeCurve::default())
        .tariff(tariff())
        .build()
        .calculate()
        .unwrap()
}

/// Fresh scratch directory under the system temporary directory.
pub fn scratch_dir(name: &str) -> PathBuf {
    let path =
        std::env::temp_dir().join(format!("solar-as-produced-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&path);
    path
}
