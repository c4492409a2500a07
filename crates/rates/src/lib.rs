//! Ratebridge Rates Crate
//!
//! This crate resolves a foreign-exchange rate from a bank's published
//! rate board and derives a marked-up payment-provider rate from it.
//!
//! # Overview
//!
//! The crate is a linear pipeline:
//!
//! ```text
//! +--------------+     +-------------+     +--------------+
//! |  RateSource  | --> |  RateQuote  | --> | RateResolver |
//! +--------------+     +-------------+     +--------------+
//!   (fetch+parse)       (buy/sell)          (markup, fallback)
//! ```
//!
//! A [`RateSource`] produces the bank's posted buy/sell rates for a
//! [`CurrencyPair`]. The [`RateResolver`] turns the quote into a
//! [`ResolvedRate`] carrying the derived markup rate, and degrades to
//! configured [`StaticRates`] whenever the source fails. Resolution
//! never errors: degraded data is tagged [`QuoteSource::Fallback`] so
//! callers can decide how far to trust it.
//!
//! # Core Types
//!
//! - [`CurrencyPair`] - A supported pair, with the board row labels for it
//! - [`RateQuote`] - Posted buy/sell rates with origin and timestamp
//! - [`ResolvedRate`] - Quote plus base and derived rates
//! - [`RateError`] - Network/parse taxonomy, absorbed by the resolver

pub mod errors;
pub mod models;
pub mod resolver;
pub mod source;

// Re-export all public types from models
pub use models::{CurrencyPair, QuoteSource, RateQuote, StaticRates};

// Re-export error types
pub use errors::{ErrorClass, RateError};

// Re-export resolver types
pub use resolver::{RateResolver, ResolvedRate, STATIC_RATES_NOTE};

// Re-export source types
pub use source::bank_of_taiwan::BankOfTaiwanSource;
pub use source::fixed::FixedRateSource;
pub use source::RateSource;
