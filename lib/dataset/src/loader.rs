//! CSV ledger loader.
//!
//! Headers: `date,department,software,seats,amount`

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::DateTime;
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::error::DatasetError;
use crate::record::{DATE_FORMAT, SaleRecord};

/// One raw CSV row. Numeric fields arrive as text and are coerced here
/// so a bad value can be reported with its line number.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    department: String,
    software: String,
    seats: String,
    amount: String,
}

pub(crate) fn read_csv(path: &Path) -> Result<Vec<SaleRecord>, DatasetError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        // The header occupies line 1.
        let line = idx + 2;

        DateTime::parse_from_str(&row.date, DATE_FORMAT).map_err(|e| {
            DatasetError::Parse(format!("line {}: bad date '{}': {}", line, row.date, e))
        })?;

        let seats = row.seats.trim().parse::<u32>().map_err(|_| {
            DatasetError::Parse(format!("line {}: bad seats '{}'", line, row.seats))
        })?;

        let amount = row.amount.trim().parse::<f64>().map_err(|_| {
            DatasetError::Parse(format!("line {}: bad amount '{}'", line, row.amount))
        })?;

        records.push(SaleRecord {
            date: row.date,
            department: row.department,
            software: row.software,
            seats,
            amount,
        });
    }

    debug!("read {} sale records from {}", records.len(), path.display());
    Ok(records)
}
