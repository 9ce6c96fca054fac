//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive in two shapes: admin records carry a plain decimal amount,
//! while catalog and cart entries carry an already formatted display string
//! such as `€89.99`. [`Price::parse_display`] turns the latter back into an
//! amount so totals are computed in decimal, never in floating point.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a displayed price.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input has no digits at all.
    #[error("price has no digits: {0:?}")]
    NoDigits(String),
    /// The digits do not form a decimal number.
    #[error("invalid price {0:?}")]
    Invalid(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a euro price, the store's trading currency.
    #[must_use]
    pub const fn eur(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::EUR)
    }

    /// Format for display (e.g., `€19.99`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }

    /// Parse the amount out of a formatted price string.
    ///
    /// Currency symbols, codes and whitespace are ignored. When both `.` and
    /// `,` appear, the last one is the decimal separator and the other is a
    /// thousands separator; a lone `,` is treated as the decimal separator.
    ///
    /// ```
    /// use pugil_core::Price;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Price::parse_display("€10.00").unwrap(), Decimal::new(1000, 2));
    /// assert_eq!(Price::parse_display("10,50 €").unwrap(), Decimal::new(1050, 2));
    /// assert!(Price::parse_display("free").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string contains no digits or the digits do
    /// not form a decimal number.
    pub fn parse_display(s: &str) -> Result<Decimal, PriceError> {
        let kept: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
            .collect();

        if !kept.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceError::NoDigits(s.to_owned()));
        }

        let normalized = match (kept.rfind('.'), kept.rfind(',')) {
            (Some(dot), Some(comma)) if comma > dot => kept.replace('.', "").replace(',', "."),
            (Some(_), Some(_)) => kept.replace(',', ""),
            (None, Some(_)) => kept.replace(',', "."),
            _ => kept,
        };

        Decimal::from_str(&normalized).map_err(|_| PriceError::Invalid(s.to_owned()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
}

impl CurrencyCode {
    /// Symbol printed before the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
        }
    }
}
