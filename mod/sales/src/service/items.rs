use std::collections::HashMap;

use serde::Deserialize;

use salesight_core::ServiceError;

use super::{SalesService, parse_query_date, positive_int, present, require_all};

/// Raw query parameters for the total-items query, exactly as received
/// from the HTTP boundary. Validation happens in the service.
#[derive(Debug, Deserialize)]
pub struct TotalItemsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub department: Option<String>,
}

/// Raw query parameters for the ranked-item query.
#[derive(Debug, Deserialize)]
pub struct NthMostQuery {
    pub item_by: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub n: Option<String>,
}

/// Per-product aggregate. Seats and amount are both accumulated even
/// though only one drives the ranking.
struct ProductAggregate {
    name: String,
    seats: u64,
    amount: f64,
}

impl SalesService {
    /// Total seats sold for one department within an inclusive date range.
    pub fn total_items(&self, query: &TotalItemsQuery) -> Result<u64, ServiceError> {
        require_all(&[
            ("start_date", present(query.start_date.as_deref())),
            ("end_date", present(query.end_date.as_deref())),
            ("department", present(query.department.as_deref())),
        ])?;

        let start = parse_query_date("start_date", query.start_date.as_deref().unwrap_or_default())?;
        let end = parse_query_date("end_date", query.end_date.as_deref().unwrap_or_default())?;
        let department = query.department.as_deref().unwrap_or_default();

        let total = self
            .in_date_range(start, end)?
            .into_iter()
            .filter(|record| record.department == department)
            .map(|record| u64::from(record.seats))
            .sum();

        Ok(total)
    }

    /// Name of the product at 1-based rank `n`, ordered descending by
    /// total seats (`item_by=quantity`) or total amount (`item_by=price`)
    /// over the date range. No department filter.
    ///
    /// Equal aggregates keep their first-encountered (ledger) order, so
    /// ranks are deterministic and strict.
    pub fn nth_most_total_item(&self, query: &NthMostQuery) -> Result<String, ServiceError> {
        let rank = positive_int(query.n.as_deref());
        require_all(&[
            ("item_by", present(query.item_by.as_deref())),
            ("start_date", present(query.start_date.as_deref())),
            ("end_date", present(query.end_date.as_deref())),
            ("n", rank.is_some()),
        ])?;

        let start = parse_query_date("start_date", query.start_date.as_deref().unwrap_or_default())?;
        let end = parse_query_date("end_date", query.end_date.as_deref().unwrap_or_default())?;

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut products: Vec<ProductAggregate> = Vec::new();
        for record in self.in_date_range(start, end)? {
            let slot = match slots.get(record.software.as_str()) {
                Some(&i) => i,
                None => {
                    slots.insert(record.software.as_str(), products.len());
                    products.push(ProductAggregate {
                        name: record.software.clone(),
                        seats: 0,
                        amount: 0.0,
                    });
                    products.len() - 1
                }
            };
            products[slot].seats += u64::from(record.seats);
            products[slot].amount += record.amount;
        }

        // Stable sort: ties keep ledger order.
        match query.item_by.as_deref().unwrap_or_default() {
            "quantity" => products.sort_by(|a, b| b.seats.cmp(&a.seats)),
            "price" => products.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            _ => {
                return Err(ServiceError::InvalidItemBy(
                    "Invalid value for item_by parameter. Expected \"quantity\" or \"price\"."
                        .into(),
                ));
            }
        }

        // require_all already rejected an absent rank.
        let n = rank.unwrap_or(1);
        if n > products.len() {
            return Err(ServiceError::RankOutOfRange(
                "Invalid value for n parameter. Exceeds the number of available items.".into(),
            ));
        }

        Ok(products[n - 1].name.clone())
    }
}

#[cfg(test)]
mod tests {
    use salesight_core::ServiceError;

    use super::super::fixture::{rec, service, small_ledger};
    use super::*;

    fn total_query(start: &str, end: &str, department: &str) -> TotalItemsQuery {
        TotalItemsQuery {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            department: Some(department.into()),
        }
    }

    fn nth_query(item_by: &str, start: &str, end: &str, n: &str) -> NthMostQuery {
        NthMostQuery {
            item_by: Some(item_by.into()),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            n: Some(n.into()),
        }
    }

    // ── total_items ──

    #[test]
    fn total_items_sums_seats_in_range() {
        let svc = small_ledger();
        let total = svc
            .total_items(&total_query("2023-01-01", "2023-12-31", "Sales"))
            .unwrap();
        assert_eq!(total, 8);
    }

    #[test]
    fn total_items_empty_range_is_zero() {
        let svc = small_ledger();
        let total = svc
            .total_items(&total_query("2024-01-01", "2024-12-31", "Sales"))
            .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn total_items_filters_department_exactly() {
        let svc = service(vec![
            rec("2023-01-15 10:00:00 +0000", "Sales", "X", 3, 100.0),
            rec("2023-01-16 10:00:00 +0000", "Engineering", "X", 7, 100.0),
            rec("2023-01-17 10:00:00 +0000", "sales", "X", 11, 100.0),
        ]);
        let total = svc
            .total_items(&total_query("2023-01-01", "2023-12-31", "Sales"))
            .unwrap();
        // Exact match only: "Engineering" and lowercase "sales" excluded.
        assert_eq!(total, 3);
    }

    #[test]
    fn total_items_disjoint_ranges_sum_to_union() {
        let svc = small_ledger();
        let department = "Sales";
        let first = svc
            .total_items(&total_query("2023-01-01", "2023-01-31", department))
            .unwrap();
        let second = svc
            .total_items(&total_query("2023-02-01", "2023-12-31", department))
            .unwrap();
        let union = svc
            .total_items(&total_query("2023-01-01", "2023-12-31", department))
            .unwrap();
        assert_eq!(first + second, union);
    }

    #[test]
    fn total_items_boundary_dates_are_inclusive() {
        let svc = small_ledger();
        let total = svc
            .total_items(&total_query("2023-01-15", "2023-02-20", "Sales"))
            .unwrap();
        assert_eq!(total, 8);
    }

    #[test]
    fn total_items_missing_parameters_all_listed() {
        let svc = small_ledger();
        let err = svc
            .total_items(&TotalItemsQuery {
                start_date: None,
                end_date: Some("".into()),
                department: None,
            })
            .unwrap_err();
        match err {
            ServiceError::MissingParameter(msg) => {
                assert_eq!(msg, "Missing parameter(s): start_date, end_date, department");
            }
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn total_items_invalid_date() {
        let svc = small_ledger();
        let err = svc
            .total_items(&total_query("yesterday", "2023-12-31", "Sales"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(_)));
    }

    // ── nth_most_total_item ──

    #[test]
    fn nth_most_rank_one_by_quantity() {
        let svc = small_ledger();
        let name = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "1"))
            .unwrap();
        assert_eq!(name, "X");
    }

    #[test]
    fn nth_most_quantity_and_price_can_disagree() {
        // Y sells more seats; X brings more revenue.
        let svc = service(vec![
            rec("2023-01-10 10:00:00 +0000", "Sales", "X", 2, 500.0),
            rec("2023-01-11 10:00:00 +0000", "Sales", "Y", 9, 90.0),
        ]);
        let by_quantity = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "1"))
            .unwrap();
        assert_eq!(by_quantity, "Y");

        let by_price = svc
            .nth_most_total_item(&nth_query("price", "2023-01-01", "2023-12-31", "1"))
            .unwrap();
        assert_eq!(by_price, "X");
    }

    #[test]
    fn nth_most_aggregates_across_lines() {
        let svc = service(vec![
            rec("2023-01-10 10:00:00 +0000", "Sales", "X", 2, 10.0),
            rec("2023-01-11 10:00:00 +0000", "Sales", "Y", 3, 10.0),
            rec("2023-01-12 10:00:00 +0000", "Sales", "X", 2, 10.0),
        ]);
        // X totals 4 seats over two lines, beating Y's 3.
        let name = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "1"))
            .unwrap();
        assert_eq!(name, "X");
    }

    #[test]
    fn nth_most_ignores_department() {
        let svc = service(vec![
            rec("2023-01-10 10:00:00 +0000", "Sales", "X", 2, 10.0),
            rec("2023-01-11 10:00:00 +0000", "Engineering", "Y", 5, 10.0),
        ]);
        let name = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "1"))
            .unwrap();
        assert_eq!(name, "Y");
    }

    #[test]
    fn nth_most_ties_keep_ledger_order() {
        let svc = service(vec![
            rec("2023-01-10 10:00:00 +0000", "Sales", "First", 5, 10.0),
            rec("2023-01-11 10:00:00 +0000", "Sales", "Second", 5, 10.0),
            rec("2023-01-12 10:00:00 +0000", "Sales", "Third", 1, 10.0),
        ]);
        let range = ("2023-01-01", "2023-12-31");
        let rank1 = svc
            .nth_most_total_item(&nth_query("quantity", range.0, range.1, "1"))
            .unwrap();
        let rank2 = svc
            .nth_most_total_item(&nth_query("quantity", range.0, range.1, "2"))
            .unwrap();
        let rank3 = svc
            .nth_most_total_item(&nth_query("quantity", range.0, range.1, "3"))
            .unwrap();
        assert_eq!(rank1, "First");
        assert_eq!(rank2, "Second");
        assert_eq!(rank3, "Third");
        // Strict ordering: consecutive ranks never repeat a product.
        assert_ne!(rank1, rank2);
        assert_ne!(rank2, rank3);
    }

    #[test]
    fn nth_most_rank_out_of_range() {
        let svc = small_ledger();
        let err = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "2"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::RankOutOfRange(_)));
    }

    #[test]
    fn nth_most_rank_out_of_range_on_empty_range() {
        let svc = small_ledger();
        let err = svc
            .nth_most_total_item(&nth_query("quantity", "2024-01-01", "2024-12-31", "1"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::RankOutOfRange(_)));
    }

    #[test]
    fn nth_most_invalid_item_by() {
        let svc = small_ledger();
        let err = svc
            .nth_most_total_item(&nth_query("revenue", "2023-01-01", "2023-12-31", "1"))
            .unwrap_err();
        match err {
            ServiceError::InvalidItemBy(msg) => {
                assert_eq!(
                    msg,
                    "Invalid value for item_by parameter. Expected \"quantity\" or \"price\"."
                );
            }
            other => panic!("expected InvalidItemBy, got {other:?}"),
        }
    }

    #[test]
    fn nth_most_zero_rank_counts_as_missing() {
        let svc = small_ledger();
        let err = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "0"))
            .unwrap_err();
        match err {
            ServiceError::MissingParameter(msg) => {
                assert_eq!(msg, "Missing parameter(s): n");
            }
            other => panic!("expected MissingParameter, got {other:?}"),
        }
    }

    #[test]
    fn nth_most_non_numeric_rank_counts_as_missing() {
        let svc = small_ledger();
        let err = svc
            .nth_most_total_item(&nth_query("quantity", "2023-01-01", "2023-12-31", "first"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingParameter(_)));
    }
}
