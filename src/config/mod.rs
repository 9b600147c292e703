//! Configuration module for lunchline
//!
//! Concentrates the data structures shared between the embedding
//! application and the flow controller when applying pricing settings.

pub mod pricing;

pub use pricing::{PricingConfig, PricingError};
