//! Aggregation over the recipient list and the submission gate.
//!
//! The displayed total sums the parsed amount of **every** row, with
//! amounts that do not parse contributing zero. Submission, on the
//! other hand, only ever includes valid rows (see
//! [`crate::api::AirdropRequest::from_rows`]). Keeping the zero
//! fallback here matches the historical form behavior; the two views
//! only diverge while the list contains invalid rows.

use crate::recipient::Recipient;

/// Sum of all rows' amounts, unparsable amounts counting as zero.
pub fn total_amount(rows: &[Recipient]) -> f64 {
    rows.iter()
        .map(|row| row.amount.trim().parse::<f64>().unwrap_or(0.0))
        .filter(|value| value.is_finite())
        .sum()
}

/// Number of rows currently passing validation.
pub fn valid_count(rows: &[Recipient]) -> usize {
    rows.iter().filter(|row| row.valid).count()
}

/// Whether the send action is allowed.
///
/// Requires at least one valid row, a strictly positive total, and a
/// loaded token balance the total does not exceed. `None` for the
/// balance means token info is not loaded yet and sending stays off.
pub fn can_send(rows: &[Recipient], balance: Option<f64>) -> bool {
    let total = total_amount(rows);
    valid_count(rows) > 0
        && total > 0.0
        && balance.map_or(false, |available| total <= available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipient::Recipient;

    const GOOD_ADDR: &str = "11111111111111111111111111111111";

    fn rows(pairs: &[(&str, &str)]) -> Vec<Recipient> {
        pairs
            .iter()
            .map(|(a, m)| Recipient::from_fields(*a, *m))
            .collect()
    }

    #[test]
    fn test_total_includes_all_rows() {
        // The second row is invalid (bad address) but its amount
        // still parses and still counts.
        let rows = rows(&[(GOOD_ADDR, "100"), ("bad", "50"), (GOOD_ADDR, "abc")]);
        assert_eq!(total_amount(&rows), 150.0);
    }

    #[test]
    fn test_unparsable_amounts_count_as_zero() {
        let rows = rows(&[(GOOD_ADDR, "abc"), (GOOD_ADDR, "")]);
        assert_eq!(total_amount(&rows), 0.0);
    }

    #[test]
    fn test_valid_count() {
        let rows = rows(&[(GOOD_ADDR, "1"), ("bad", "1"), (GOOD_ADDR, "-1")]);
        assert_eq!(valid_count(&rows), 1);
    }

    #[test]
    fn test_gate_requires_a_valid_row() {
        let rows = rows(&[("bad", "100")]);
        assert!(!can_send(&rows, Some(1000.0)));
    }

    #[test]
    fn test_gate_requires_positive_total() {
        let rows = vec![Recipient::empty()];
        assert!(!can_send(&rows, Some(1000.0)));
    }

    #[test]
    fn test_gate_requires_loaded_balance() {
        let rows = rows(&[(GOOD_ADDR, "10")]);
        assert!(!can_send(&rows, None));
    }

    #[test]
    fn test_gate_rejects_total_over_balance() {
        let rows = rows(&[(GOOD_ADDR, "60"), (GOOD_ADDR, "50")]);
        assert!(!can_send(&rows, Some(100.0)));
        assert!(can_send(&rows, Some(110.0)));
    }

    #[test]
    fn test_gate_counts_invalid_rows_in_total() {
        // 90 valid + 20 from an invalid-address row pushes the total
        // over the balance even though only 90 would be submitted.
        let rows = rows(&[(GOOD_ADDR, "90"), ("bad", "20")]);
        assert!(!can_send(&rows, Some(100.0)));
    }
}
