pub mod departments;
pub mod items;
pub mod monthly;

use std::sync::Arc;

use chrono::NaiveDate;

use salesight_core::ServiceError;
use salesight_dataset::{SaleRecord, SalesTable};

/// Sales service — the query engine over the in-memory ledger.
///
/// Holds a shared reference to the immutable table; every operation is a
/// pure read, so a single service instance serves any number of
/// concurrent requests.
pub struct SalesService {
    pub(crate) table: Arc<SalesTable>,
}

impl SalesService {
    pub fn new(table: Arc<SalesTable>) -> Self {
        Self { table }
    }

    /// Records whose calendar date (in their own encoded offset) falls in
    /// the inclusive `[start, end]` range, in ledger order.
    pub(crate) fn in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<&SaleRecord>, ServiceError> {
        let mut matched = Vec::new();
        for record in self.table.records() {
            let day = record.calendar_date().map_err(|e| {
                ServiceError::Internal(format!("corrupt record date '{}': {}", record.date, e))
            })?;
            if start <= day && day <= end {
                matched.push(record);
            }
        }
        Ok(matched)
    }
}

// ── Parameter validation helpers ────────────────────────────────────
//
// Query parameters arrive from the HTTP boundary as raw optional
// strings; classification into MissingParameter / InvalidDate happens
// here, not in the handlers.

/// An absent or empty-string parameter counts as missing.
pub(crate) fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Fail with one message naming every missing parameter, not just the
/// first: `Missing parameter(s): start_date, end_date`.
pub(crate) fn require_all(params: &[(&str, bool)]) -> Result<(), ServiceError> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::MissingParameter(format!(
            "Missing parameter(s): {}",
            missing.join(", ")
        )))
    }
}

/// Parse a `YYYY-MM-DD` range boundary.
pub(crate) fn parse_query_date(name: &str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ServiceError::InvalidDate(format!(
            "Invalid value for {} parameter. Expected a YYYY-MM-DD date.",
            name
        ))
    })
}

/// A strictly positive integer; zero and unparseable values yield `None`
/// and are reported as missing, matching the ledger API's historical
/// falsy-check on `n`.
pub(crate) fn positive_int(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// A non-zero year; zero and unparseable values yield `None` and are
/// reported as missing, same falsy-check as [`positive_int`].
pub(crate) fn nonzero_year(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|&y| y != 0)
}
