mod common;

use approx::assert_abs_diff_eq;
use solar_as_produced::{
    core::{guarantee::GuaranteeCurve, run::Run},
    error::{BillingError, ConfigurationError},
    io::load_profile::read_load_profile,
    quantity::percent::Percent,
};

use crate::common::{HEADER, calculate, flat_day_csv, load_profile, tariff};

#[test]
fn test_flat_day_end_to_end() {
    let load_profile = load_profile(&flat_day_csv("2024-01-10"));
    let calculation = calculate(&load_profile);
    assert_eq!(calculation.charged.len(), 24);

    let hour_8 = calculation.charged.iter().find(|interval| interval.load.hour == 8).unwrap();
    assert_eq!(hour_8.guarantee, Percent::from(29.0));
    assert_abs_diff_eq!(hour_8.energy.solar.0.0, 2.9, epsilon = 1e-12);
    assert_abs_diff_eq!(hour_8.energy.non_solar.0.0, 7.1, epsilon = 1e-12);
    assert_abs_diff_eq!(hour_8.energy.solar_charge.0.0, 8.7, epsilon = 1e-12);
    assert_abs_diff_eq!(hour_8.energy.non_solar_charge.0.0, 39.05, epsilon = 1e-12);
    assert_abs_diff_eq!(hour_8.energy.total_charge.0.0, 47.75, epsilon = 1e-12);

    // Night hours are billed at the spot price plus the admin fee only:
    let hour_1 = &calculation.charged[0];
    assert_abs_diff_eq!(hour_1.energy.total_charge.0.0, 55.0, epsilon = 1e-12);

    let summary = &calculation.summary;
    assert_eq!(summary.periods.len(), 1);
    assert_eq!(summary.periods[0].label.to_string(), "Jan-24");
    assert_abs_diff_eq!(summary.grand_total.totals.total.0.0, 240.0, epsilon = 1e-9);

    // Σ percentages of the built-in curve is 708, so 70.8 kWh are solar.
    assert_abs_diff_eq!(summary.grand_total.totals.solar.0.0, 70.8, epsilon = 1e-9);
    let expected_charge = 70.8 * 3.0 + 169.2 * 5.5;
    assert_abs_diff_eq!(
        summary.grand_total.totals.total_charge.0.0,
        expected_charge,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        summary.grand_total.effective_rate.unwrap().0.0,
        expected_charge / 240.0,
        epsilon = 1e-12
    );

    assert_eq!(calculation.hourly.0.len(), 24);
    let peak = calculation.hourly.solar_peak().unwrap();
    assert_eq!(peak.hour, 12);
}

#[test]
fn test_periods_are_chronological_regardless_of_input_order() {
    let csv = format!(
        "{HEADER}\n\
         Mar-24,2024-03-01 11:00:00,12,5,1\n\
         Dec-23,2023-12-01 11:00:00,12,5,1\n\
         Feb-24,2024-01-26 11:00:00,12,5,1\n\
         Jan-24,2024-01-25 11:00:00,12,5,1\n"
    );
    let calculation = calculate(&load_profile(&csv));
    let labels = calculation
        .summary
        .rows()
        .map(|row| row.label.to_string())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["Dec-23", "Jan-24", "Feb-24", "Mar-24", "Grand Total"]);

    let timestamps = calculation
        .detailed()
        .map(|interval| interval.load.timestamp.date().to_string())
        .collect::<Vec<_>>();
    assert_eq!(timestamps, ["2023-12-01", "2024-01-25", "2024-01-26", "2024-03-01"]);
}

#[test]
fn test_zero_hour_rejects_the_run() {
    let csv = format!(
        "{HEADER}\n\
         Jan-24,2024-01-10 00:00:00,1,5,1\n\
         Jan-24,2024-01-10 00:00:00,0,5,1\n"
    );
    let load_profile = load_profile(&csv);
    let result = Run::builder()
        .load_profile(&load_profile)
        .curve(&GuaranteeCurve::default())
        .tariff(tariff())
        .build()
        .calculate();
    let Err(error) = result else { panic!("the run must fail") };
    assert!(matches!(error, BillingError::Lookup { row: 2, hour: 0 }));
    assert!(error.to_string().contains("expected 1–24"));
}

#[test]
fn test_out_of_range_hours_are_lookup_errors() {
    for hour in [-1_i64, 25, 4_294_967_296] {
        let csv = format!(
            "{HEADER}\n\
             Jan-24,2024-01-10 00:00:00,{hour},5,1\n"
        );
        let load_profile = load_profile(&csv);
        let result = Run::builder()
            .load_profile(&load_profile)
            .curve(&GuaranteeCurve::default())
            .tariff(tariff())
            .build()
            .calculate();
        assert!(
            matches!(result, Err(BillingError::Lookup { row: 1, hour: actual }) if actual == hour),
            "hour {hour}",
        );
    }
}

#[test]
fn test_non_finite_energy_rejects_the_profile() {
    let csv = format!(
        "{HEADER}\n\
         Jan-24,2024-01-10 00:00:00,1,5,NaN\n"
    );
    let result = read_load_profile(csv.as_bytes());
    assert!(matches!(result, Err(ConfigurationError::MalformedRow { line: 2, .. })));
}

#[test]
fn test_empty_load_profile() {
    let calculation = calculate(&load_profile(&format!("{HEADER}\n")));
    assert!(calculation.charged.is_empty());
    assert!(calculation.summary.periods.is_empty());
    assert_eq!(calculation.summary.grand_total.effective_rate, None);
    assert_eq!(calculation.summary.undefined_rates().count(), 1);
    assert!(calculation.hourly.0.is_empty());
}
