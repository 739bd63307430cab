//! Currency and decimal helpers for ledger amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; a report is always in one currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Coerces a nullable ledger amount to a value; missing is zero.
#[must_use]
pub fn amount_or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Returns `quantity × unit_cost`, treating a missing cost as zero.
///
/// Negative quantities are kept, so the result may be negative.
#[must_use]
pub fn extended_value(quantity: i64, unit_cost: Option<Decimal>) -> Decimal {
    Decimal::from(quantity) * amount_or_zero(unit_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("IDR").unwrap(), Currency::Idr);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero(None), Decimal::ZERO);
        assert_eq!(amount_or_zero(Some(dec!(12.50))), dec!(12.50));
        assert_eq!(amount_or_zero(Some(dec!(-3))), dec!(-3));
    }

    #[rstest]
    #[case(100, Some(dec!(10)), dec!(1000))]
    #[case(3, Some(dec!(2.25)), dec!(6.75))]
    #[case(5, None, dec!(0))]
    #[case(-20, Some(dec!(10)), dec!(-200))]
    #[case(0, Some(dec!(99)), dec!(0))]
    fn test_extended_value(
        #[case] quantity: i64,
        #[case] unit_cost: Option<Decimal>,
        #[case] expected: Decimal,
    ) {
        assert_eq!(extended_value(quantity, unit_cost), expected);
    }
}
