//! Black-Scholes Model
//!
//! Closed-form price and Greeks for European options with continuous
//! dividend yield. The whole valuation is a deterministic pure function:
//! no iteration, no randomness, no I/O.
//!
//! Conventions:
//! - Vega and Rho are scaled per 1-point move (factor 0.01)
//! - Theta is per calendar day, annualized value divided by 252 trading days

use crate::core::{Greeks, OptionType, PricerResult, PricingInputs, PricingResult};
use crate::models::normal::{norm_cdf, norm_pdf};

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate - div + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, div, vol, time) - vol * time.sqrt()
}

/// Intermediates shared by the price and all five Greeks.
///
/// Each transcendental is evaluated once here instead of once per formula.
struct SharedTerms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-qT)
    div_factor: f64,
    /// e^(-rT)
    discount: f64,
    /// N'(d1)
    pdf_d1: f64,
}

impl SharedTerms {
    fn from_inputs(inputs: &PricingInputs) -> Self {
        let d1 = d1(
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.dividend_yield,
            inputs.volatility,
            inputs.time_to_expiry,
        );
        let sqrt_t = inputs.time_to_expiry.sqrt();

        Self {
            d1,
            d2: d1 - inputs.volatility * sqrt_t,
            sqrt_t,
            div_factor: (-inputs.dividend_yield * inputs.time_to_expiry).exp(),
            discount: (-inputs.rate * inputs.time_to_expiry).exp(),
            pdf_d1: norm_pdf(d1),
        }
    }
}

/// Trading days per year, used for the per-day Theta scaling
const TRADING_DAYS: f64 = 252.0;

/// Evaluate the Black-Scholes price and Greeks for one option.
///
/// Validates the inputs first: `spot`, `strike`, `volatility` and
/// `time_to_expiry` must be strictly positive or an `InvalidInput` error is
/// returned before any formula runs. Either a complete [`PricingResult`] is
/// produced or an error, never a partial result.
pub fn evaluate(inputs: &PricingInputs) -> PricerResult<PricingResult> {
    inputs.validate()?;

    let t = SharedTerms::from_inputs(inputs);
    let spot = inputs.spot;
    let strike = inputs.strike;
    let rate = inputs.rate;
    let div = inputs.dividend_yield;
    let vol = inputs.volatility;
    let time = inputs.time_to_expiry;

    let price = match inputs.option_type {
        OptionType::Call => {
            spot * t.div_factor * norm_cdf(t.d1) - strike * t.discount * norm_cdf(t.d2)
        }
        OptionType::Put => {
            strike * t.discount * norm_cdf(-t.d2) - spot * t.div_factor * norm_cdf(-t.d1)
        }
    };

    let delta = match inputs.option_type {
        OptionType::Call => t.div_factor * norm_cdf(t.d1),
        OptionType::Put => -t.div_factor * norm_cdf(-t.d1),
    };

    // Gamma and Vega are identical for calls and puts
    let gamma = t.div_factor * t.pdf_d1 / (spot * vol * t.sqrt_t);
    let vega = 0.01 * spot * t.div_factor * t.pdf_d1 * t.sqrt_t;

    // Annualized theta: time decay plus carry terms, then per calendar day
    let decay = -spot * t.div_factor * t.pdf_d1 * vol / (2.0 * t.sqrt_t);
    let theta = match inputs.option_type {
        OptionType::Call => {
            (decay + div * spot * t.div_factor * norm_cdf(t.d1)
                - rate * strike * t.discount * norm_cdf(t.d2))
                / TRADING_DAYS
        }
        OptionType::Put => {
            (decay - div * spot * t.div_factor * norm_cdf(-t.d1)
                + rate * strike * t.discount * norm_cdf(-t.d2))
                / TRADING_DAYS
        }
    };

    let rho = match inputs.option_type {
        OptionType::Call => 0.01 * strike * time * t.discount * norm_cdf(t.d2),
        OptionType::Put => -0.01 * strike * time * t.discount * norm_cdf(-t.d2),
    };

    Ok(PricingResult {
        price,
        greeks: Greeks::new(delta, gamma, vega, theta, rho),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricerError;

    const TOL: f64 = 1e-4;

    fn reference_inputs(option_type: OptionType) -> PricingInputs {
        PricingInputs::new(50.0, 48.0, 0.05, 0.4, 0.5, option_type).with_dividend_yield(0.02)
    }

    #[test]
    fn test_reference_call() {
        let result = evaluate(&reference_inputs(OptionType::Call)).unwrap();

        assert!((result.price - 6.864281).abs() < TOL);
        assert!((result.greeks.delta - 0.626318).abs() < TOL);
        assert!((result.greeks.gamma - 0.026371).abs() < TOL);
        assert!((result.greeks.vega - 0.131856).abs() < TOL);
        assert!((result.greeks.theta - -0.023296).abs() < TOL);
        assert!((result.greeks.rho - 0.122258).abs() < TOL);
    }

    #[test]
    fn test_reference_put() {
        let result = evaluate(&reference_inputs(OptionType::Put)).unwrap();

        assert!((result.price - 4.176665).abs() < TOL);
        assert!((result.greeks.delta - -0.363731).abs() < TOL);
        assert!((result.greeks.theta - -0.017936).abs() < TOL);
        assert!((result.greeks.rho - -0.111816).abs() < TOL);

        // Gamma and Vega match the call
        let call = evaluate(&reference_inputs(OptionType::Call)).unwrap();
        assert!((result.greeks.gamma - call.greeks.gamma).abs() < 1e-12);
        assert!((result.greeks.vega - call.greeks.vega).abs() < 1e-12);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S*e^(-qT) - K*e^(-rT) across a spread of parameters
        let cases = [
            (50.0, 48.0, 0.05, 0.02, 0.4, 0.5),
            (100.0, 100.0, 0.03, 0.0, 0.2, 1.0),
            (500.0, 525.0, 0.045, 0.013, 0.18, 0.08),
            (0.83, 0.82, 0.035, 0.0, 0.4, 0.25), // FX-style, strike 0.82
        ];

        for (spot, strike, rate, div, vol, time) in cases {
            let call = evaluate(
                &PricingInputs::new(spot, strike, rate, vol, time, OptionType::Call)
                    .with_dividend_yield(div),
            )
            .unwrap();
            let put = evaluate(
                &PricingInputs::new(spot, strike, rate, vol, time, OptionType::Put)
                    .with_dividend_yield(div),
            )
            .unwrap();

            let lhs = call.price - put.price;
            let rhs = spot * (-div * time).exp() - strike * (-rate * time).exp();
            assert!(
                (lhs - rhs).abs() < 1e-8,
                "parity violated for spot={}, strike={}",
                spot,
                strike
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let inputs = reference_inputs(OptionType::Call);
        let a = evaluate(&inputs).unwrap();
        let b = evaluate(&inputs).unwrap();

        // Bit-for-bit identical on repeated evaluation
        assert_eq!(a, b);
    }

    #[test]
    fn test_boundary_rejection() {
        let good = reference_inputs(OptionType::Call);

        let mut zero_time = good;
        zero_time.time_to_expiry = 0.0;
        let mut zero_vol = good;
        zero_vol.volatility = 0.0;
        let mut zero_spot = good;
        zero_spot.spot = 0.0;
        let mut neg_strike = good;
        neg_strike.strike = -5.0;

        for bad in [zero_time, zero_vol, zero_spot, neg_strike] {
            assert!(matches!(
                evaluate(&bad).unwrap_err(),
                PricerError::InvalidInput(_)
            ));
        }
    }

    #[test]
    fn test_vega_increases_with_vol_near_atm() {
        let mut last = f64::NEG_INFINITY;
        for vol in [0.05, 0.10, 0.15, 0.20] {
            let result = evaluate(&PricingInputs::new(
                100.0,
                100.0,
                0.03,
                vol,
                0.5,
                OptionType::Call,
            ))
            .unwrap();
            assert!(result.greeks.vega > last);
            last = result.greeks.vega;
        }
    }

    #[test]
    fn test_deep_otm_not_clamped() {
        // Far out of the money the raw formula output is returned as-is,
        // tiny and possibly rounded to zero
        let result = evaluate(&PricingInputs::new(
            100.0,
            300.0,
            0.01,
            0.15,
            0.1,
            OptionType::Call,
        ))
        .unwrap();

        assert!(result.price.abs() < 1e-10);
        assert!(result.price.is_finite());
    }

    #[test]
    fn test_d1_d2() {
        let d1 = d1(50.0, 48.0, 0.05, 0.02, 0.4, 0.5);
        let d2 = d2(50.0, 48.0, 0.05, 0.02, 0.4, 0.5);

        assert!((d1 - 0.3387819105604632).abs() < 1e-12);
        assert!((d2 - 0.05593919808584413).abs() < 1e-12);
        assert!((d1 - d2 - 0.4 * 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_call_delta_bounds() {
        // Call delta stays in (0, e^(-qT)), put delta in (-e^(-qT), 0)
        for strike in [10.0, 50.0, 200.0] {
            let call = evaluate(
                &PricingInputs::new(50.0, strike, 0.05, 0.4, 0.5, OptionType::Call)
                    .with_dividend_yield(0.02),
            )
            .unwrap();
            let put = evaluate(
                &PricingInputs::new(50.0, strike, 0.05, 0.4, 0.5, OptionType::Put)
                    .with_dividend_yield(0.02),
            )
            .unwrap();

            assert!(call.greeks.delta > 0.0 && call.greeks.delta < 1.0);
            assert!(put.greeks.delta < 0.0 && put.greeks.delta > -1.0);
            // Delta parity: call delta - put delta = e^(-qT)
            let div_factor = (-0.02_f64 * 0.5).exp();
            assert!((call.greeks.delta - put.greeks.delta - div_factor).abs() < 1e-10);
        }
    }
}
