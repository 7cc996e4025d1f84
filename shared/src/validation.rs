//! Input validation rules for the Cleanstock platform

use rust_decimal::Decimal;
use std::str::FromStr;

/// Password policy: at least 6 characters, ASCII letters and digits only
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 6 && password.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse a sale total into a decimal amount
///
/// Totals are persisted as text; every write must go through this check so
/// stored values always parse back.
pub fn parse_total(total: &str) -> Option<Decimal> {
    Decimal::from_str(total.trim()).ok()
}
