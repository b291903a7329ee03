mod common;

use std::fs;

use solar_as_produced::{
    core::guarantee::GuaranteeCurve,
    io::export::{
        DETAILED_FILE_NAME,
        REFERENCE_FILE_NAME,
        REPORT_FILE_NAME,
        SUMMARY_FILE_NAME,
        export_to,
    },
};

use crate::common::{HEADER, calculate, flat_day_csv, load_profile, scratch_dir, tariff};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(ToOwned::to_owned).collect()
}

#[test]
fn test_export_writes_every_file() {
    let output_dir = scratch_dir("every-file");
    let mut csv = flat_day_csv("2024-01-25");
    csv.push_str(&flat_day_csv("2024-01-26").replacen(&format!("{HEADER}\n"), "", 1));
    let calculation = calculate(&load_profile(&csv));

    export_to(&output_dir, &calculation, &GuaranteeCurve::default(), tariff(), true).unwrap();

    let detailed = read_lines(&output_dir.join(DETAILED_FILE_NAME));
    assert_eq!(detailed.len(), 49);
    assert_eq!(
        detailed[0],
        "supply period,datetime,hour,wesm,kWh,Solar Consumption (kWh),\
         Non Solar Consumption (kWh),Solar Charge (pHp),Non Solar Charge (pHp),\
         Total Charge (pHp)"
    );

    let summary = read_lines(&output_dir.join(SUMMARY_FILE_NAME));
    assert_eq!(summary.len(), 4);
    assert!(summary[0].starts_with("Supply Period,kWh,"));
    assert!(summary[0].ends_with(",Effective Rate (pHp/kWh)"));
    assert!(summary[1].starts_with("Jan-24,240,"));
    assert!(summary[2].starts_with("Feb-24,240,"));
    assert!(summary[3].starts_with("Grand Total,480,"));

    let reference = read_lines(&output_dir.join(REFERENCE_FILE_NAME));
    assert_eq!(reference.len(), 25);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join(REPORT_FILE_NAME)).unwrap())
            .unwrap();
    assert_eq!(report["periods"].as_array().unwrap().len(), 2);

    fs::remove_dir_all(&output_dir).unwrap();
}

#[test]
fn test_empty_export_still_has_headers() {
    let output_dir = scratch_dir("empty");
    let calculation = calculate(&load_profile(&format!("{HEADER}\n")));

    export_to(&output_dir, &calculation, &GuaranteeCurve::default(), tariff(), false).unwrap();

    assert_eq!(read_lines(&output_dir.join(DETAILED_FILE_NAME)).len(), 1);
    assert_eq!(
        read_lines(&output_dir.join(SUMMARY_FILE_NAME))[1],
        "Grand Total,0,0,0,0,0,0,"
    );
    assert!(!output_dir.join(REPORT_FILE_NAME).exists());

    fs::remove_dir_all(&output_dir).unwrap();
}
