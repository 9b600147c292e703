//! Pricing configuration
//!
//! The one tunable of the ordering flow: the fixed tax rate applied at
//! checkout. Configuration is in-memory only, with a compiled-in default
//! and explicit bounds; there is no file or environment surface.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Errors raised when constructing a pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("tax rate {rate} is outside the supported range {min}..={max}")]
    TaxRateOutOfRange {
        rate: Decimal,
        min: Decimal,
        max: Decimal,
    },
}

/// Validated pricing configuration for one ordering flow
///
/// # Example
/// ```rust
/// use lunchline::config::pricing::PricingConfig;
/// use rust_decimal_macros::dec;
///
/// let pricing = PricingConfig::default();
/// assert_eq!(pricing.tax_rate(), dec!(0.08));
///
/// assert!(PricingConfig::new(dec!(1.5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    tax_rate: Decimal,
}

impl PricingConfig {
    /// The tax rate applied when none is configured explicitly
    pub const DEFAULT_TAX_RATE: Decimal = dec!(0.08);
    /// Lowest accepted tax rate
    pub const MIN_TAX_RATE: Decimal = Decimal::ZERO;
    /// Highest accepted tax rate
    pub const MAX_TAX_RATE: Decimal = Decimal::ONE;

    /// Creates a configuration with the given tax rate
    ///
    /// The rate must lie in `MIN_TAX_RATE..=MAX_TAX_RATE`.
    pub fn new(tax_rate: Decimal) -> Result<Self, PricingError> {
        if tax_rate < Self::MIN_TAX_RATE || tax_rate > Self::MAX_TAX_RATE {
            return Err(PricingError::TaxRateOutOfRange {
                rate: tax_rate,
                min: Self::MIN_TAX_RATE,
                max: Self::MAX_TAX_RATE,
            });
        }

        Ok(Self { tax_rate })
    }

    /// Returns the configured tax rate
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Self::DEFAULT_TAX_RATE,
        }
    }
}
