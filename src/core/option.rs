//! Option type and pricing inputs
//!
//! Represents the contract/market parameters for a single European option
//! valuation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricerError;

    fn from_str(s: &str) -> PricerResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricerError::unsupported_option_type(other)),
        }
    }
}

/// Inputs for a single Black-Scholes valuation
///
/// All rates and the volatility are annualized decimals (0.05 = 5%);
/// `time_to_expiry` is in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Current price of the underlying
    pub spot: f64,
    /// Contract strike
    pub strike: f64,
    /// Risk-free rate (continuously compounded)
    pub rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    /// Annualized volatility
    pub volatility: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Call or Put
    pub option_type: OptionType,
}

impl PricingInputs {
    /// Create inputs with zero dividend yield
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            dividend_yield: 0.0,
            volatility,
            time_to_expiry,
            option_type,
        }
    }

    /// Set the dividend yield
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Check that the formulas are numerically defined for these inputs.
    ///
    /// `spot`, `strike`, `volatility` and `time_to_expiry` must be finite and
    /// strictly positive: the model takes ln(S/K) and divides by sigma*sqrt(T).
    /// NaN fails the positivity test and is rejected like any other bad value.
    pub fn validate(&self) -> PricerResult<()> {
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("time_to_expiry", self.time_to_expiry),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricerError::invalid_input(format!(
                    "{} must be strictly positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
