use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    charge::ChargedInterval,
    guarantee::{GuaranteeCurve, GuaranteeEntry},
    period::SupplyPeriod,
    profile::HourlyProfile,
    summary::{Summary, SummaryLabel, SummaryRow},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

/// Guarantee curve, with the out-of-range percentages highlighted.
#[must_use]
pub fn build_curve_table(curve: &GuaranteeCurve) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Solar guarantee"]);
    for GuaranteeEntry { hour, percent } in curve.entries() {
        let color = if !percent.is_within_bounds() {
            Color::Red
        } else if percent.0.0 > 0.0 {
            Color::DarkYellow
        } else {
            Color::Reset
        };
        table.add_row(vec![right(hour), right(percent).fg(color)]);
    }
    table
}

/// Out-of-range entries next to the values they would be clamped to.
#[must_use]
pub fn build_clamp_table(violations: &[GuaranteeEntry]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Given", "Clamped"]);
    for entry in violations {
        table.add_row(vec![
            right(entry.hour),
            right(entry.percent).fg(Color::Red),
            right(entry.percent.clamp_to_bounds()).fg(Color::Green),
        ]);
    }
    table
}

pub fn build_detailed_table<'a>(charged: impl IntoIterator<Item = &'a ChargedInterval>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Supply period",
        "Timestamp",
        "Hour",
        "Spot price",
        "Guarantee",
        "Consumption",
        "Solar",
        "Non-solar",
        "Solar charge",
        "Non-solar charge",
        "Total charge",
    ]);
    for interval in charged {
        let energy = &interval.energy;
        table.add_row(vec![
            Cell::new(interval.supply_period),
            Cell::new(interval.load.timestamp.format("%Y-%m-%d %H:%M")),
            right(interval.load.hour).add_attribute(Attribute::Dim),
            right(interval.load.spot_price).fg(if interval.load.spot_price.0.0 < 0.0 {
                Color::Green
            } else {
                Color::Reset
            }),
            right(interval.guarantee).add_attribute(Attribute::Dim),
            right(energy.total),
            right(energy.solar).fg(Color::DarkYellow),
            right(energy.non_solar),
            right(energy.solar_charge).fg(Color::DarkYellow),
            right(energy.non_solar_charge),
            right(energy.total_charge).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Supply period",
        "From",
        "Till",
        "Consumption",
        "Solar",
        "Non-solar",
        "Solar charge",
        "Non-solar charge",
        "Total charge",
        "Effective rate",
    ]);
    for row in summary.rows() {
        table.add_row(summary_cells(row));
    }
    table
}

fn summary_cells(row: &SummaryRow) -> Vec<Cell> {
    let (label, start, end) = match row.label {
        SummaryLabel::Period(SupplyPeriod { start, end }) => (
            Cell::new(row.label),
            Cell::new(start).add_attribute(Attribute::Dim),
            Cell::new(end).add_attribute(Attribute::Dim),
        ),
        SummaryLabel::GrandTotal => {
            (Cell::new(row.label).add_attribute(Attribute::Bold), Cell::new(""), Cell::new(""))
        }
    };
    let totals = &row.totals;
    vec![
        label,
        start,
        end,
        right(totals.total),
        right(totals.solar).fg(Color::DarkYellow),
        right(totals.non_solar),
        right(totals.solar_charge).fg(Color::DarkYellow),
        right(totals.non_solar_charge),
        right(totals.total_charge).add_attribute(Attribute::Bold),
        row.effective_rate
            .map_or_else(|| right("n/a").fg(Color::Red), |rate| right(rate).fg(Color::Cyan)),
    ]
}

#[must_use]
pub fn build_hourly_table(profile: &HourlyProfile) -> Table {
    let peak_hour = profile.solar_peak().map(|peak| peak.hour);
    let mut table = new_table();
    table.set_header(vec!["Hour", "Consumption", "Solar", "Non-solar"]);
    for hour in &profile.0 {
        let hour_cell = right(hour.hour);
        table.add_row(vec![
            if Some(hour.hour) == peak_hour {
                hour_cell.add_attribute(Attribute::Bold).fg(Color::DarkYellow)
            } else {
                hour_cell
            },
            right(hour.total),
            right(hour.solar).fg(Color::DarkYellow),
            right(hour.non_solar),
        ]);
    }
    table
}

#[must_use]
pub fn build_period_table(periods: &[(NaiveDate, SupplyPeriod)]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Supply period", "From", "Till"]);
    for (date, period) in periods {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(period).add_attribute(Attribute::Bold),
            Cell::new(period.start).add_attribute(Attribute::Dim),
            Cell::new(period.end).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
