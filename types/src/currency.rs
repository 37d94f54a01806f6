//! Currency amounts branded by unit.
//!
//! [`UsdAmount`] and [`EurAmount`] are both `f64` underneath, so without the
//! brand a EUR value could silently flow into a USD calculation. Amounts are
//! branded in exactly two places: [`parse_amount`] (the input boundary) and the
//! conversion functions, which re-brand their output.
//!
//! A raw number is not a EUR amount:
//!
//! ```compile_fail,E0308
//! use brandkit_types::euro_to_usd;
//!
//! let _ = euro_to_usd(12.0);
//! ```
//!
//! Neither is a USD amount:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{UsdAmount, euro_to_usd};
//!
//! let usd = UsdAmount::from_unverified(10.0);
//! let _ = euro_to_usd(usd);
//! ```
//!
//! And the result is not a EUR amount:
//!
//! ```compile_fail,E0308
//! use brandkit_types::{EurAmount, euro_to_usd};
//!
//! let eur: EurAmount = euro_to_usd(EurAmount::from_unverified(10.0));
//! ```

use thiserror::Error;

use crate::brand::{Brand, BrandTag};

/// United States dollars.
#[derive(Debug)]
pub enum Usd {}

impl BrandTag for Usd {
    const NAME: &'static str = "USD";
}

/// Euros.
#[derive(Debug)]
pub enum Eur {}

impl BrandTag for Eur {
    const NAME: &'static str = "EUR";
}

pub type UsdAmount = Brand<f64, Usd>;
pub type EurAmount = Brand<f64, Eur>;

// ============================================================================
// Exchange rates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExchangeRateError {
    #[error("exchange rate must be finite, got {0}")]
    NotFinite(f64),
    #[error("exchange rate must be greater than zero, got {0}")]
    NotPositive(f64),
}

/// EUR to USD multiplier.
///
/// # Invariants
///
/// - Finite
/// - Strictly positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Fixed rate used by [`euro_to_usd`].
    pub const EUR_TO_USD: Self = Self(1.18);

    pub fn new(rate: f64) -> Result<Self, ExchangeRateError> {
        if !rate.is_finite() {
            return Err(ExchangeRateError::NotFinite(rate));
        }
        if rate <= 0.0 {
            return Err(ExchangeRateError::NotPositive(rate));
        }
        Ok(Self(rate))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::EUR_TO_USD
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = ExchangeRateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Converts euros to dollars at [`ExchangeRate::EUR_TO_USD`].
#[must_use]
pub fn euro_to_usd(euro: EurAmount) -> UsdAmount {
    convert_eur_to_usd(euro, ExchangeRate::EUR_TO_USD)
}

/// Converts euros to dollars at `rate`.
///
/// The product is a plain `f64`; it only becomes a [`UsdAmount`] here.
#[must_use]
pub fn convert_eur_to_usd(euro: EurAmount, rate: ExchangeRate) -> UsdAmount {
    UsdAmount::from_unverified(euro * rate.value())
}

// ============================================================================
// Parsing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount must not be empty")]
    Empty,
    #[error("invalid amount '{raw}'")]
    InvalidNumber { raw: String },
    #[error("amount must be finite, got '{raw}'")]
    NotFinite { raw: String },
    #[error("expected a {expected} amount, got {found}")]
    CurrencyMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("unexpected trailing input '{rest}'")]
    TrailingInput { rest: String },
}

/// Parses `"12.50"` or `"12.50 EUR"` as an amount in currency `C`.
///
/// This is the trusted boundary for amounts: it checks that the text is a
/// finite number and that any currency code matches `C`, then brands the value.
/// The code is matched case-insensitively.
pub fn parse_amount<C: BrandTag>(raw: &str) -> Result<Brand<f64, C>, AmountParseError> {
    let mut parts = raw.split_whitespace();
    let Some(number) = parts.next() else {
        return Err(AmountParseError::Empty);
    };

    if let Some(code) = parts.next()
        && !code.eq_ignore_ascii_case(C::NAME)
    {
        return Err(AmountParseError::CurrencyMismatch {
            expected: C::NAME,
            found: code.to_string(),
        });
    }

    let rest: Vec<&str> = parts.collect();
    if !rest.is_empty() {
        return Err(AmountParseError::TrailingInput {
            rest: rest.join(" "),
        });
    }

    let value: f64 = number
        .parse()
        .map_err(|_| AmountParseError::InvalidNumber {
            raw: number.to_string(),
        })?;
    if !value.is_finite() {
        return Err(AmountParseError::NotFinite {
            raw: number.to_string(),
        });
    }

    Ok(Brand::from_unverified(value))
}
