//! Money value object (integer subunits + currency code)

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal places between subunits and major units
const SUBUNIT_SCALE: u32 = 2;

/// An amount of money in the currency's smallest unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }

    pub fn zero(currency: &str) -> Self {
        Self::new(0, currency)
    }

    /// Parse a user-typed major-unit amount such as `12.5` or `12.50`.
    ///
    /// Returns `None` for empty, negative, or over-precise input.
    pub fn parse_major(input: &str, currency: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let major = Decimal::from_str(trimmed).ok()?;
        if major.is_sign_negative() || major.scale() > SUBUNIT_SCALE {
            return None;
        }
        let subunits = major.checked_mul(Decimal::from(100))?.to_i64()?;
        Some(Self::new(subunits, currency))
    }

    /// Amount in major units, always with two decimals
    pub fn major_units(&self) -> Decimal {
        Decimal::new(self.amount, SUBUNIT_SCALE)
    }

    /// Multiply the amount by a (possibly fractional) quantity, rounding to
    /// the nearest subunit. `None` when the product does not fit in `i64`.
    pub fn times(&self, multiplier: Decimal) -> Option<Self> {
        let amount = Decimal::from(self.amount)
            .checked_mul(multiplier)?
            .round()
            .to_i64()?;
        Some(Self::new(amount, &self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major_units(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_major_units() {
        assert_eq!(Money::new(1500, "USD").to_string(), "15.00 USD");
        assert_eq!(Money::new(1999, "EUR").to_string(), "19.99 EUR");
        assert_eq!(Money::new(5, "USD").to_string(), "0.05 USD");
    }

    #[test]
    fn test_zero_display() {
        assert_eq!(Money::zero("USD").to_string(), "0.00 USD");
    }

    #[test]
    fn test_parse_major() {
        assert_eq!(Money::parse_major("12.5", "USD"), Some(Money::new(1250, "USD")));
        assert_eq!(Money::parse_major("12.50", "USD"), Some(Money::new(1250, "USD")));
        assert_eq!(Money::parse_major(" 7 ", "USD"), Some(Money::new(700, "USD")));
        assert_eq!(Money::parse_major("0", "USD"), Some(Money::new(0, "USD")));
    }

    #[test]
    fn test_parse_major_rejects_bad_input() {
        assert!(Money::parse_major("", "USD").is_none());
        assert!(Money::parse_major("abc", "USD").is_none());
        assert!(Money::parse_major("-1", "USD").is_none());
        assert!(Money::parse_major("1.999", "USD").is_none());
    }

    #[test]
    fn test_times_whole_quantity() {
        let unit = Money::new(500, "USD");
        assert_eq!(unit.times(Decimal::from(3)), Some(Money::new(1500, "USD")));
    }

    #[test]
    fn test_times_fractional_quantity_rounds() {
        let unit = Money::new(1001, "USD");
        // 1001 * 1.5 = 1501.5 -> banker's rounding to 1502
        assert_eq!(unit.times(Decimal::new(15, 1)).map(|m| m.amount), Some(1502));
    }

    #[test]
    fn test_times_zero() {
        let unit = Money::new(500, "USD");
        assert_eq!(unit.times(Decimal::ZERO), Some(Money::zero("USD")));
    }

    #[test]
    fn test_times_overflow_is_none() {
        let unit = Money::new(500, "USD");
        let quantity = Decimal::from_str("100000000000000000000").unwrap();
        assert_eq!(unit.times(quantity), None);
        assert_eq!(Money::new(i64::MAX, "USD").times(Decimal::from(2)), None);
    }
}
