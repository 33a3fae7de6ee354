//! Lenient parsing of user-typed currency amounts.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Money;

/// Parse input such as `$15,000,000` or `A$ 2.5m`.
///
/// Everything except digits and `.` is dropped, then the leading numeric
/// part is read. Input with no number in it yields `0`.
pub fn parse_currency_input(raw: &str) -> Money {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    // Only the first decimal point counts: "1.2.3" reads as 1.2.
    let numeric = match cleaned.match_indices('.').nth(1) {
        Some((idx, _)) => &cleaned[..idx],
        None => cleaned.as_str(),
    };
    let numeric = numeric.trim_end_matches('.');

    if numeric.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(numeric).unwrap_or(Decimal::ZERO)
}
