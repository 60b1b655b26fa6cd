//! Yahoo Finance data fetcher
//!
//! Fetches free spot quotes and daily close history, from which callers
//! derive the spot and volatility inputs for a valuation.
//! Uses Yahoo Finance's unofficial API.
//!
//! Note: This is for educational/research purposes. Yahoo Finance
//! data is delayed ~15 minutes and intended for personal use.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    quote_url: String,
    chart_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            quote_url: "https://query1.finance.yahoo.com/v7/finance/quote".to_string(),
            chart_url: "https://query1.finance.yahoo.com/v8/finance/chart".to_string(),
        }
    }

    /// Get current quote for a symbol
    pub fn get_quote(&self, symbol: &str) -> PricerResult<SpotQuote> {
        let url = format!("{}?symbols={}", self.quote_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricerError::Network(e.to_string()))?
            .json()
            .map_err(|e| PricerError::Data(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| PricerError::Data("No quote data returned".into()))?;

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: result.regular_market_price,
            bid: result.bid,
            ask: result.ask,
            timestamp: Utc::now(),
        })
    }

    /// Get daily close history for a symbol over a Yahoo range string
    /// (e.g. "3mo", "6mo", "1y")
    pub fn get_daily_history(&self, symbol: &str, range: &str) -> PricerResult<Vec<CandleBar>> {
        let url = format!(
            "{}/{}?range={}&interval=1d",
            self.chart_url, symbol, range
        );

        let response: YahooChartResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricerError::Network(e.to_string()))?
            .json()
            .map_err(|e| PricerError::Data(format!("Failed to parse chart: {}", e)))?;

        let result = response
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| PricerError::Data("No chart data returned".into()))?;

        let closes = result
            .indicators
            .quote
            .first()
            .ok_or_else(|| PricerError::Data("Chart response missing quote block".into()))?;

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, &ts) in result.timestamp.iter().enumerate() {
            let close = closes.close.get(i).copied().flatten();
            let date = DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive());

            match (date, close) {
                (Some(date), Some(close)) => bars.push(CandleBar { date, close }),
                _ => {
                    // Holidays and halted sessions come back as nulls
                    tracing::warn!("Skipping bar {} for {}: missing close", i, symbol);
                }
            }
        }

        if bars.is_empty() {
            return Err(PricerError::Data(format!(
                "No usable bars returned for {}",
                symbol
            )));
        }

        Ok(bars)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Spot price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// One daily close observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandleBar {
    pub date: NaiveDate,
    pub close: f64,
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
    bid: Option<f64>,
    ask: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Vec<YahooChartData>,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteSeries>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteSeries {
    close: Vec<Option<f64>>,
}
