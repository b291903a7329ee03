use chrono::NaiveDate;
use thiserror::Error;

use crate::{core::guarantee::GuaranteeEntry, quantity::rate::KilowattHourRate};

/// Reasons a billing run stops before producing any output.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Some guarantee percentages lie outside `0..=100`.
    #[error(
        "{} solar guarantee percentage(s) are outside 0–100%: {}",
        .0.len(),
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
    )]
    Validation(Vec<GuaranteeEntry>),

    /// An input row refers to an hour the guarantee curve does not cover.
    #[error("row {row}: no solar guarantee for hour {hour} (expected 1–24)")]
    Lookup { row: usize, hour: i64 },

    /// The effective rate of a zero-energy period is undefined.
    #[error("effective rate of {period} is undefined: zero energy consumed")]
    DivisionUndefined { period: String },
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("guarantee curve hour {0} is outside 1–24")]
    HourOutOfRange(u32),

    #[error("guarantee curve lists hour {0} more than once")]
    DuplicateHour(u32),

    #[error("guarantee curve is missing hour {0}")]
    MissingHour(u32),

    #[error("{name} must be a non-negative number, got {value}")]
    InvalidTariff { name: &'static str, value: KilowattHourRate },

    #[error("load profile is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("load profile line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("date {0} has no supply period within the supported calendar")]
    DateOutOfRange(NaiveDate),
}
