use serde::Deserialize;

use salesight_core::ServiceError;

use super::{SalesService, nonzero_year, present, require_all};

/// Raw query parameters for the monthly-sales query.
#[derive(Debug, Deserialize)]
pub struct MonthlySalesQuery {
    pub product: Option<String>,
    pub year: Option<String>,
}

impl SalesService {
    /// Amount totals for one product across the twelve months of a year.
    /// Index 0 is January; months with no sales stay at zero.
    ///
    /// Year and month come from the leading `-`-delimited components of
    /// the raw ledger timestamp. This textual path is deliberately kept
    /// separate from the range-filter date parse.
    pub fn monthly_sales(&self, query: &MonthlySalesQuery) -> Result<[f64; 12], ServiceError> {
        let year = nonzero_year(query.year.as_deref());
        require_all(&[
            ("product", present(query.product.as_deref())),
            ("year", year.is_some()),
        ])?;

        let product = query.product.as_deref().unwrap_or_default();
        // require_all already rejected an absent year.
        let year = year.unwrap_or_default();

        let mut totals = [0.0_f64; 12];
        for record in self.table.records() {
            if record.software != product {
                continue;
            }

            let mut parts = record.date.split('-');
            let record_year: i32 = parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| corrupt_date(&record.date))?;
            if record_year != year {
                continue;
            }

            let month: usize = parts
                .next()
                .and_then(|p| p.parse().ok())
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(|| corrupt_date(&record.date))?;
            totals[month - 1] += record.amount;
        }

        Ok(totals)
    }
}

fn corrupt_date(date: &str) -> ServiceError {
    ServiceError::Internal(format!("corrupt record date '{}'", date))
}
