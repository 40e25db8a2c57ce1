//! Monetary amounts.
//!
//! Prices and fees are exact decimals; nothing in the cart ever rounds.

use rust_decimal::{Decimal, RoundingStrategy};

pub type Money = Decimal;

/// Renders an amount the way the app shows prices, e.g. `R$ 29.00`.
///
/// Halves round away from zero.
pub fn format_brl(amount: Money) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R$ {cents:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_two_places() {
        assert_eq!(format_brl(Decimal::from(29)), "R$ 29.00");
        assert_eq!(format_brl(Decimal::new(69, 1)), "R$ 6.90");
        assert_eq!(format_brl(Decimal::new(12345, 3)), "R$ 12.35");
    }

    #[test]
    fn test_format_rounds_halves_away_from_zero() {
        assert_eq!(format_brl(Decimal::new(12125, 3)), "R$ 12.13");
        assert_eq!(format_brl(Decimal::new(-5, 3)), "R$ -0.01");
        assert_eq!(format_brl(Decimal::new(12344, 3)), "R$ 12.34");
    }
}
