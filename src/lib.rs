//! # BS Pricer - Black-Scholes European Option Pricing
//!
//! Closed-form pricing and risk sensitivities (Greeks) for European options
//! under the Black-Scholes model with continuous dividend yield.
//!
//! ## Overview
//!
//! The core of the crate is a single pure operation:
//! [`evaluate`](models::black_scholes::evaluate) takes a
//! [`PricingInputs`](core::PricingInputs) value and returns a
//! [`PricingResult`](core::PricingResult) carrying the theoretical price and
//! the five standard Greeks (Delta, Gamma, Vega, Theta, Rho).
//!
//! ## Key Components
//!
//! - **Black-Scholes**: price and Greeks for Call/Put with dividend yield
//! - **Standard Normal**: CDF/PDF primitives backing d1/d2 evaluation
//! - **Data Fetching**: Yahoo Finance spot quotes and daily history, plus a
//!   Treasury yield reader, for deriving the model inputs
//!
//! ## Usage
//!
//! ```rust
//! use bs_pricer::prelude::*;
//!
//! let inputs = PricingInputs::new(50.0, 48.0, 0.05, 0.4, 0.5, OptionType::Call)
//!     .with_dividend_yield(0.02);
//! let result = evaluate(&inputs).unwrap();
//!
//! println!("price: {:.4}, delta: {:.4}", result.price, result.greeks.delta);
//! ```
//!
//! ## What This Crate Does
//!
//! - Prices European Calls and Puts in closed form
//! - Computes Delta, Gamma, Vega, Theta (per day), Rho
//! - Derives spot and realized volatility from historical closes
//! - Reads a risk-free rate from a Treasury yield quote
//!
//! ## What This Crate Does NOT Do
//!
//! - Solve for implied volatility
//! - Handle American early exercise
//! - Price path-dependent or multi-leg payoffs
//! - Build discount or volatility curves

pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        Greeks, OptionType, PricerError, PricerResult, PricingInputs, PricingResult,
    };

    // Data fetching
    pub use crate::data::{
        latest_close, log_returns, realized_volatility, CandleBar, SpotQuote, TreasurySource,
        YahooClient,
    };

    // Black-Scholes
    pub use crate::models::{d1, d2, evaluate, norm_cdf, norm_pdf};
}

// Re-export main types at crate root
pub use crate::core::{PricerError, PricerResult};
pub use crate::models::black_scholes::evaluate;
