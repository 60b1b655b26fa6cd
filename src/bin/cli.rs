//! BS Pricer CLI
//!
//! Command-line front end: a worked pricing example with fixed inputs,
//! then an attempt at a live valuation from Yahoo Finance data.
//!
//! Usage: cli [SYMBOL]

use bs_pricer::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("Black-Scholes Option Pricer");
    println!("===========================\n");

    // Example: the classic textbook scenario
    let inputs = PricingInputs::new(50.0, 48.0, 0.05, 0.4, 0.5, OptionType::Call)
        .with_dividend_yield(0.02);

    println!("Pricing Example:");
    println!("  Spot: ${:.2}", inputs.spot);
    println!("  Strike: ${:.2}", inputs.strike);
    println!("  Time: {:.2} years", inputs.time_to_expiry);
    println!("  Rate: {:.1}%", inputs.rate * 100.0);
    println!("  Div: {:.1}%", inputs.dividend_yield * 100.0);
    println!("  Vol: {:.1}%\n", inputs.volatility * 100.0);

    match evaluate(&inputs) {
        Ok(result) => print_result(&inputs, &result),
        Err(e) => println!("Pricing failed: {}", e),
    }

    // Parity check against the matching put
    let put_inputs = PricingInputs {
        option_type: OptionType::Put,
        ..inputs
    };
    if let (Ok(call), Ok(put)) = (evaluate(&inputs), evaluate(&put_inputs)) {
        let rhs = inputs.spot * (-inputs.dividend_yield * inputs.time_to_expiry).exp()
            - inputs.strike * (-inputs.rate * inputs.time_to_expiry).exp();
        println!("\nPut-Call Parity Check:");
        println!("  C - P = {:.6}", call.price - put.price);
        println!("  S*e^(-qT) - K*e^(-rT) = {:.6}", rhs);
    }

    // Try a live valuation
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "SPY".to_string());

    println!("\n--- Live Data ---");
    println!("Fetching {} data from Yahoo Finance...\n", symbol);

    match live_valuation(&symbol) {
        Ok((inputs, result)) => {
            println!("{} ATM 3-month call:", symbol);
            println!("  Spot: ${:.2} (latest close)", inputs.spot);
            println!("  Realized vol: {:.1}%", inputs.volatility * 100.0);
            println!("  Risk-free rate: {:.2}%\n", inputs.rate * 100.0);
            print_result(&inputs, &result);
        }
        Err(e) => {
            println!("Could not price from live data: {}", e);
            println!("(This is expected if you're offline or Yahoo API is unavailable)");
        }
    }

    println!("\n--- Done ---");
}

/// Fetch spot/vol/rate for a symbol and price an at-the-money 3-month call
fn live_valuation(symbol: &str) -> PricerResult<(PricingInputs, PricingResult)> {
    let client = YahooClient::new();

    let bars = client.get_daily_history(symbol, "6mo")?;
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let spot = latest_close(&bars)?;
    let vol = realized_volatility(&closes)?;
    let rate = TreasurySource::new().latest_yield()?;

    let inputs = PricingInputs::new(spot, spot, rate, vol, 0.25, OptionType::Call);
    let result = evaluate(&inputs)?;
    Ok((inputs, result))
}

fn print_result(inputs: &PricingInputs, result: &PricingResult) {
    println!("{} Price: ${:.4}", inputs.option_type, result.price);
    println!("Greeks:");
    println!("  Delta: {:.4}", result.greeks.delta);
    println!("  Gamma: {:.6}", result.greeks.gamma);
    println!("  Vega:  {:.4}", result.greeks.vega);
    println!("  Theta: {:.4} (per day)", result.greeks.theta);
    println!("  Rho:   {:.4}", result.greeks.rho);
}
