use std::collections::BTreeMap;

use serde::Deserialize;

use salesight_core::ServiceError;

use super::{SalesService, parse_query_date, present, require_all};

/// Raw date-range parameters, as received from the HTTP boundary.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SalesService {
    /// Share of all seats sold per department within the range, as
    /// percentage strings with a trailing `%`.
    ///
    /// The raw floating-point share is formatted without rounding. When
    /// no seats match the range at all, the result is an empty map
    /// rather than a division by zero.
    pub fn department_share_percentage(
        &self,
        query: &DateRangeQuery,
    ) -> Result<BTreeMap<String, String>, ServiceError> {
        require_all(&[
            ("start_date", present(query.start_date.as_deref())),
            ("end_date", present(query.end_date.as_deref())),
        ])?;

        let start = parse_query_date("start_date", query.start_date.as_deref().unwrap_or_default())?;
        let end = parse_query_date("end_date", query.end_date.as_deref().unwrap_or_default())?;

        let mut seats_by_department: BTreeMap<String, u64> = BTreeMap::new();
        for record in self.in_date_range(start, end)? {
            *seats_by_department
                .entry(record.department.clone())
                .or_insert(0) += u64::from(record.seats);
        }

        let total: u64 = seats_by_department.values().sum();
        if total == 0 {
            return Ok(BTreeMap::new());
        }

        Ok(seats_by_department
            .into_iter()
            .map(|(department, seats)| {
                let share = (seats as f64 / total as f64) * 100.0;
                (department, format!("{share}%"))
            })
            .collect())
    }
}
