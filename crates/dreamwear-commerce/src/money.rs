//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Arithmetic keeps full precision and only
//! [`Money::rounded`] / [`Money::display`] round to the currency's minor
//! unit, so totals are never rounded mid-calculation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact amount in major units (e.g., dollars).
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from a decimal amount.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from minor units (e.g., cents).
    ///
    /// ```
    /// use dreamwear_commerce::money::{Currency, Money};
    /// let price = Money::from_minor(5999, Currency::USD);
    /// assert_eq!(price.display(), "$59.99");
    /// ```
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor, currency.decimal_places()), currency)
    }

    /// Parse a decimal string such as `"5.99"`.
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, CommerceError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| CommerceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// The amount rounded half away from zero to the currency's minor unit.
    pub fn rounded(&self) -> Decimal {
        self.amount.round_dp_with_strategy(
            self.currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.rounded())
    }

    /// Add another Money value.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(factor))
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Calculate a percentage of this amount without rounding.
    pub fn percentage(&self, percent: Decimal) -> Money {
        Money::new(self.amount * percent / Decimal::ONE_HUNDRED, self.currency)
    }

    /// Sum Money values that must all be in `currency`.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(4999, Currency::USD);
        assert_eq!(m.amount, Decimal::new(4999, 2));
        assert_eq!(m.currency, Currency::USD);

        let m = Money::from_minor(100, Currency::JPY);
        assert_eq!(m.amount, Decimal::from(100));
    }

    #[test]
    fn test_money_parse() {
        let m = Money::parse("5.99", Currency::USD).unwrap();
        assert_eq!(m, Money::from_minor(599, Currency::USD));

        assert!(matches!(
            Money::parse("five", Currency::USD),
            Err(CommerceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
        assert_eq!(Money::from_minor(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_display_rounds_but_amount_keeps_precision() {
        // 20% of 179.97 is 35.994
        let discount = Money::from_minor(17997, Currency::USD).percentage(Decimal::from(20));
        assert_eq!(discount.amount, Decimal::new(35994, 3));
        assert_eq!(discount.display_amount(), "35.99");

        let half = Money::new(Decimal::new(1005, 3), Currency::USD);
        assert_eq!(half.display_amount(), "1.01");
    }

    #[test]
    fn test_money_addition_and_subtraction() {
        let a = Money::from_minor(1000, Currency::USD);
        let b = Money::from_minor(300, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap(), Money::from_minor(1300, Currency::USD));
        assert_eq!(a.try_subtract(&b).unwrap(), Money::from_minor(700, Currency::USD));
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_minor(5999, Currency::USD);
        assert_eq!(m.try_multiply(3).unwrap().display(), "$179.97");
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::from_minor(1000, Currency::USD);
        let eur = Money::from_minor(1000, Currency::EUR);
        assert!(matches!(
            usd.try_add(&eur),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_try_sum() {
        let prices = [
            Money::from_minor(3499, Currency::USD),
            Money::from_minor(6499, Currency::USD),
        ];
        let total = Money::try_sum(&prices, Currency::USD).unwrap();
        assert_eq!(total.display(), "$99.98");

        let empty: [Money; 0] = [];
        assert!(Money::try_sum(&empty, Currency::USD).unwrap().is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
