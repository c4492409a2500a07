//! Rate sources.
//!
//! A source produces the bank's posted buy/sell rates for a currency
//! pair. Which implementation the resolver uses is selected by
//! configuration at startup.

pub mod bank_of_taiwan;
pub mod fixed;
mod traits;

pub use traits::RateSource;
