use std::path::Path;

use crate::error::DatasetError;
use crate::loader;
use crate::record::SaleRecord;

/// Immutable, in-memory sales ledger.
///
/// Loaded entirely before any request is served and never mutated
/// afterwards; there is no write path. Every query is an independent
/// read-only projection over [`records`](Self::records), so the table
/// can be shared freely across concurrent requests without locking.
#[derive(Debug, Default)]
pub struct SalesTable {
    records: Vec<SaleRecord>,
}

impl SalesTable {
    /// Load the ledger from a headered CSV file with columns
    /// `date, department, software, seats, amount`.
    ///
    /// Numeric fields are coerced to their semantic types and every
    /// timestamp is validated against [`DATE_FORMAT`](crate::DATE_FORMAT);
    /// a malformed row fails the whole load so the process never starts
    /// with a corrupt table.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(Self {
            records: loader::read_csv(path.as_ref())?,
        })
    }

    /// Build a table directly from records (tests, embedding).
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// All records, in ledger order.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
