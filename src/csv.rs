use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::model::{ParseRoundingModeError, RoundingMode, SessionEvent, SplitRecord};

/// Errors that can occur when reading events or writing history as csv
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open '{path}': {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized action '{action}'")]
    UnrecognizedAction { line: usize, action: String },

    #[error("line {line}: {source}")]
    InvalidRounding {
        line: usize,
        source: ParseRoundingModeError,
    },

    #[error("failed to write row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    action: String,
    value: Option<String>,
}

const HISTORY_HEADER: [&str; 6] = ["id", "bill", "people", "tip", "rounding", "per_person"];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    id: u64,
    bill: &'a str,
    people: &'a str,
    tip: &'a str,
    rounding: String,
    per_person: String,
}

/// Read recorded session events from a csv file with `action,value` columns
pub fn read_events(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<SessionEvent, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(parse_row))
}

fn parse_row(
    (idx, result): (usize, Result<InputRow, csv::Error>),
) -> Result<SessionEvent, CsvError> {
    let line = idx + 2; // 1-indexed, skip header
    let row = result.map_err(|source| CsvError::Parse { line, source })?;
    let value = row.value.unwrap_or_default();
    match row.action.as_str() {
        "bill" => Ok(SessionEvent::SetBill(value)),
        "people" => Ok(SessionEvent::SetPeople(value)),
        "tip" => Ok(SessionEvent::SetTip(value)),
        "rounding" => value
            .parse::<RoundingMode>()
            .map(SessionEvent::SetRounding)
            .map_err(|source| CsvError::InvalidRounding { line, source }),
        "save" => Ok(SessionEvent::Save),
        "clear" => Ok(SessionEvent::Clear),
        other => Err(CsvError::UnrecognizedAction {
            line,
            action: other.to_string(),
        }),
    }
}

/// Write saved splits in csv format, in the order given.
///
/// The header row is always written, even for an empty history.
pub fn write_history<'a>(
    records: impl IntoIterator<Item = &'a SplitRecord>,
    writer: impl io::Write,
) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(HISTORY_HEADER)?;

    for record in records {
        let row = OutputRow {
            id: record.id().0,
            bill: record.bill_amount(),
            people: record.num_people(),
            tip: record.tip_percentage(),
            rounding: record.rounding_mode().to_string(),
            per_person: record.per_person().to_fixed(2),
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
