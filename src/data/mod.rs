//! Market data acquisition
//!
//! Handles:
//! - Yahoo Finance spot quotes and daily close history (free, delayed)
//! - Realized volatility from a close-price series
//! - Risk-free rate from a Treasury yield index quote

pub mod history;
pub mod rates;
pub mod yahoo;

pub use history::*;
pub use rates::*;
pub use yahoo::*;
