//! Pricing models
//!
//! Implements:
//! - Standard normal CDF/PDF primitives
//! - Black-Scholes closed-form price and Greeks

pub mod black_scholes;
pub mod normal;

pub use black_scholes::*;
pub use normal::*;
