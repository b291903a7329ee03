use std::{fmt::Debug, fs::File, io::Read, path::Path};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    core::load::LoadInterval,
    error::ConfigurationError,
    prelude::*,
    quantity::Quantity,
};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column positions resolved from the header.
struct Columns {
    supply_period: usize,
    datetime: usize,
    hour: usize,
    wesm: usize,
    energy: usize,
}

impl Columns {
    fn try_from_header(header: &StringRecord) -> Result<Self, ConfigurationError> {
        let position = |name: &'static str| {
            header
                .iter()
                .position(|column| column == name)
                .ok_or(ConfigurationError::MissingColumn(name))
        };
        Ok(Self {
            supply_period: position("supply period")?,
            datetime: position("datetime")?,
            hour: position("hour")?,
            wesm: position("wesm")?,
            energy: position("kWh")?,
        })
    }
}

#[instrument(name = "Reading the load profile…")]
pub fn read_load_profile_from<P: AsRef<Path> + Debug>(path: P) -> Result<Vec<LoadInterval>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    let load_profile = read_load_profile(file)
        .with_context(|| format!("invalid load profile `{}`", path.display()))?;
    info!(n_intervals = load_profile.len(), "loaded");
    Ok(load_profile)
}

/// Parse the load profile CSV, in the file order.
///
/// Extra columns are ignored. A file with a header and no data rows yields an empty profile.
pub fn read_load_profile(reader: impl Read) -> Result<Vec<LoadInterval>, ConfigurationError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let header = reader.headers().map_err(|error| malformed(1, &error))?;
    let columns = Columns::try_from_header(header)?;

    let mut load_profile = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| {
            malformed(error.position().map_or(0, csv::Position::line), &error)
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        load_profile.push(parse_record(&record, &columns).map_err(|reason| {
            ConfigurationError::MalformedRow { line, reason }
        })?);
    }
    Ok(load_profile)
}

fn parse_record(record: &StringRecord, columns: &Columns) -> Result<LoadInterval, String> {
    let cell = |index: usize, name: &str| {
        record.get(index).ok_or_else(|| format!("missing `{name}` cell"))
    };
    Ok(LoadInterval {
        supply_period: cell(columns.supply_period, "supply period")?.to_owned(),
        timestamp: parse_datetime(cell(columns.datetime, "datetime")?)?,
        hour: parse_hour(cell(columns.hour, "hour")?)?,
        spot_price: parse_quantity(cell(columns.wesm, "wesm")?, "wesm")?,
        energy: parse_quantity(cell(columns.energy, "kWh")?, "kWh")?,
    })
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| format!("unrecognised datetime `{value}`"))
}

/// Hours exported by spreadsheets sometimes come as `8.0`.
///
/// Any integer is accepted here, the guarantee curve lookup rejects the ones outside `1..=24`.
#[expect(clippy::cast_possible_truncation)]
fn parse_hour(value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .ok()
        .or_else(|| {
            let hour = value.parse::<f64>().ok()?;
            #[expect(clippy::cast_precision_loss)]
            let range = (i64::MIN as f64)..(i64::MAX as f64);
            (hour.fract() == 0.0 && range.contains(&hour)).then(|| hour as i64)
        })
        .ok_or_else(|| format!("invalid hour `{value}`"))
}

/// `NaN` and infinities parse fine as floats but would poison every total they reach.
fn parse_quantity<const POWER: isize, const TIME: isize, const COST: isize>(
    value: &str,
    name: &str,
) -> Result<Quantity<POWER, TIME, COST>, String> {
    let quantity = value
        .parse::<Quantity<POWER, TIME, COST>>()
        .map_err(|_| format!("invalid `{name}` value `{value}`"))?;
    if quantity.is_finite() {
        Ok(quantity)
    } else {
        Err(format!("non-finite `{name}` value `{value}`"))
    }
}

fn malformed(line: u64, error: &csv::Error) -> ConfigurationError {
    ConfigurationError::MalformedRow { line, reason: error.to_string() }
}
