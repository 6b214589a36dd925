//! Price formatting using decimal arithmetic.
//!
//! Prices come from the catalog as decimal amounts in the store's single
//! currency and are kept as [`rust_decimal::Decimal`] to avoid float
//! rounding in subtotals.

use rust_decimal::Decimal;

/// Format a decimal amount as a display price (e.g., "$19.99").
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(format_price(Decimal::new(5, 0)), "$5.00");
    }

    #[test]
    fn test_format_price_rescales_long_fractions() {
        assert_eq!(format_price(Decimal::new(10_011, 3)), "$10.01");
    }
}
