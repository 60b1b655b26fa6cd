//! Risk-free rate from Treasury yield quotes
//!
//! Yahoo publishes Treasury yield indices (^IRX, ^FVX, ^TNX, ^TYX) as
//! regular symbols quoted in percent; the latest print of one of these is a
//! reasonable risk-free proxy for pricing.

use crate::core::{PricerError, PricerResult};
use crate::data::yahoo::YahooClient;

/// Default yield index: CBOE 10-Year Treasury Note yield
pub const DEFAULT_YIELD_SYMBOL: &str = "^TNX";

/// Risk-free rate source backed by a Treasury yield index quote
pub struct TreasurySource {
    client: YahooClient,
    symbol: String,
}

impl TreasurySource {
    pub fn new() -> Self {
        Self::with_symbol(DEFAULT_YIELD_SYMBOL)
    }

    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            client: YahooClient::new(),
            symbol: symbol.into(),
        }
    }

    /// Latest annualized yield as a decimal (0.042 = 4.2%)
    pub fn latest_yield(&self) -> PricerResult<f64> {
        let quote = self.client.get_quote(&self.symbol)?;
        let rate = percent_to_decimal(quote.price)?;

        tracing::info!("Risk-free rate from {}: {:.4}", self.symbol, rate);
        Ok(rate)
    }
}

impl Default for TreasurySource {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a percent yield print to a decimal rate, rejecting garbage values
fn percent_to_decimal(percent: f64) -> PricerResult<f64> {
    // Yield indices print in percent; anything outside (0, 30) is a bad read
    if !percent.is_finite() || percent <= 0.0 || percent > 30.0 {
        return Err(PricerError::data(format!(
            "Implausible yield quote: {}",
            percent
        )));
    }
    Ok(percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_decimal() {
        assert!((percent_to_decimal(4.25).unwrap() - 0.0425).abs() < 1e-12);
        assert!((percent_to_decimal(0.5).unwrap() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_implausible_yields() {
        assert!(percent_to_decimal(0.0).is_err());
        assert!(percent_to_decimal(-1.0).is_err());
        assert!(percent_to_decimal(55.0).is_err());
        assert!(percent_to_decimal(f64::NAN).is_err());
    }

    #[test]
    #[ignore] // Requires network
    fn test_latest_yield() {
        let source = TreasurySource::new();
        let rate = source.latest_yield().unwrap();

        assert!(rate > 0.0 && rate < 0.3);
        println!("10Y yield: {:.4}", rate);
    }
}
