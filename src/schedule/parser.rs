//! Fee schedule parsing and validation
//!
//! Converts raw delimited text with a `Fee Type,From,To,Percentage` header
//! into a flat [`RateTable`]. All checks are row-local: there is no overlap,
//! gap, or duplicate detection across rows.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::types::{FeeRule, RateTable};

/// Column names the header row must match exactly, in order and count
pub const EXPECTED_HEADERS: [&str; 4] = ["Fee Type", "From", "To", "Percentage"];

/// Errors raised while parsing a fee schedule
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Schedule input is empty")]
    EmptyInput,
    #[error("Invalid headers: expected 'Fee Type,From,To,Percentage', found '{found}'")]
    InvalidHeaders { found: String },
    #[error("Row {row}: missing value for column '{column}'")]
    MissingColumn { row: usize, column: &'static str },
    #[error("Row {row}: expected 4 columns, found {found}")]
    WrongColumnCount { row: usize, found: usize },
    #[error("Row {row}: invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("Row {row}: percentage {value} must be between 0 and 1")]
    PercentageOutOfRange { row: usize, value: BigDecimal },
    #[error("Malformed input: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse raw schedule text into a rate table, preserving row order.
///
/// The header row must match [`EXPECTED_HEADERS`] exactly. A header-only
/// input is valid and yields an empty table. Field values are trimmed
/// before validation; row numbers in errors are 1-based over data rows.
pub fn parse_schedule(raw: &str) -> Result<RateTable, ScheduleError> {
    if raw.trim().is_empty() {
        return Err(ScheduleError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.len() != EXPECTED_HEADERS.len()
        || headers
            .iter()
            .zip(EXPECTED_HEADERS)
            .any(|(actual, expected)| actual != expected)
    {
        return Err(ScheduleError::InvalidHeaders {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut table = RateTable::new();
    for (offset, record) in reader.records().enumerate() {
        table.push(parse_row(offset + 1, &record?)?);
    }

    Ok(table)
}

fn parse_row(row: usize, record: &StringRecord) -> Result<FeeRule, ScheduleError> {
    if record.len() > EXPECTED_HEADERS.len() {
        return Err(ScheduleError::WrongColumnCount {
            row,
            found: record.len(),
        });
    }

    let fee_type = field(row, record, 0)?;
    let from = numeric_field(row, record, 1)?;
    let to = numeric_field(row, record, 2)?;
    let percentage = numeric_field(row, record, 3)?;

    if percentage < BigDecimal::from(0) || percentage > BigDecimal::from(1) {
        return Err(ScheduleError::PercentageOutOfRange {
            row,
            value: percentage,
        });
    }

    Ok(FeeRule::new(fee_type.to_string(), from, to, percentage))
}

fn field<'a>(
    row: usize,
    record: &'a StringRecord,
    column: usize,
) -> Result<&'a str, ScheduleError> {
    match record.get(column) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ScheduleError::MissingColumn {
            row,
            column: EXPECTED_HEADERS[column],
        }),
    }
}

fn numeric_field(
    row: usize,
    record: &StringRecord,
    column: usize,
) -> Result<BigDecimal, ScheduleError> {
    let value = field(row, record, column)?;
    BigDecimal::from_str(value).map_err(|_| ScheduleError::InvalidNumber {
        row,
        column: EXPECTED_HEADERS[column],
        value: value.to_string(),
    })
}
