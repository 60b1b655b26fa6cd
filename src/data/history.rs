//! Realized volatility from historical closes
//!
//! Turns a daily close-price series into the two scalars the pricer
//! consumes: the most recent close (spot) and the annualized standard
//! deviation of daily log returns (volatility). The pricer itself never
//! sees the series, only the resulting numbers.

use crate::core::{PricerError, PricerResult};
use crate::data::yahoo::CandleBar;

/// Trading days per year used to annualize daily returns
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Daily log returns ln(c_i / c_{i-1}) of a close series
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect()
}

/// Annualized realized volatility of a daily close series.
///
/// Sample standard deviation of the log returns, scaled by sqrt(252).
/// Needs at least three closes for a meaningful sample; every close must be
/// strictly positive for the log to be defined.
pub fn realized_volatility(closes: &[f64]) -> PricerResult<f64> {
    if closes.len() < 3 {
        return Err(PricerError::data(format!(
            "Need at least 3 closes to estimate volatility, got {}",
            closes.len()
        )));
    }
    if closes.iter().any(|&c| !(c.is_finite() && c > 0.0)) {
        return Err(PricerError::data("Close series contains non-positive prices"));
    }

    let returns = log_returns(closes);
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Most recent close of a bar series, used as the spot observation
pub fn latest_close(bars: &[CandleBar]) -> PricerResult<f64> {
    bars.last()
        .map(|bar| bar.close)
        .ok_or_else(|| PricerError::data("Empty bar series"))
}
