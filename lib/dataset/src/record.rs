use chrono::{DateTime, NaiveDate, ParseError};
use serde::{Deserialize, Serialize};

/// Timestamp format used by the ledger: `"2023-01-15 10:00:00 +0000"`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// One transaction line of the sales ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    /// Raw timestamp with timezone offset, kept as written in the source.
    pub date: String,

    pub department: String,

    /// Product name.
    pub software: String,

    /// Seats (units) sold on this line.
    pub seats: u32,

    /// Monetary total for this line. One currency across the whole ledger.
    pub amount: f64,
}

impl SaleRecord {
    /// Calendar date component of `date`, in the record's own encoded
    /// timezone offset. Time of day is discarded.
    pub fn calendar_date(&self) -> Result<NaiveDate, ParseError> {
        DateTime::parse_from_str(&self.date, DATE_FORMAT).map(|dt| dt.date_naive())
    }
}
