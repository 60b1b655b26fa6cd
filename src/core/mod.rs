//! Core data types for the Black-Scholes pricer
//!
//! Defines fundamental types:
//! - OptionType: Call/Put discriminator
//! - PricingInputs: contract and market parameters for one valuation
//! - Greeks / PricingResult: price and sensitivities
//! - PricerError: error taxonomy

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
