//! Option Greeks and the valuation result
//!
//! First order sensitivities plus Gamma, and the price/Greeks bundle that a
//! valuation produces.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ (per 1-point vol move)
    pub vega: f64,
    /// Theta: dV/dt (time decay, per calendar day)
    pub theta: f64,
    /// Rho: dV/dr (per 1-point rate move)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Scale Greeks by a factor (e.g., for notional)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Add two Greeks (for aggregating positions)
    pub fn add(&self, other: &Greeks) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            theta: self.theta + other.theta,
            rho: self.rho + other.rho,
        }
    }
}

/// Result of a single valuation: theoretical price plus Greeks
///
/// A pure function of the inputs that produced it; the price is the raw
/// formula output, not floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Theoretical option price
    pub price: f64,
    /// The five standard sensitivities
    pub greeks: Greeks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let g = Greeks::new(0.5, 0.02, 0.13, -0.02, 0.12);
        let doubled = g.scale(2.0);
        assert_eq!(doubled.delta, 1.0);
        assert_eq!(doubled.rho, 0.24);

        let sum = g.add(&doubled);
        assert!((sum.gamma - 0.06).abs() < 1e-12);
        assert!((sum.theta - -0.06).abs() < 1e-12);
    }
}
