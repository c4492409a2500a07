//! Rate source trait definition.

use async_trait::async_trait;

use crate::errors::RateError;
use crate::models::{CurrencyPair, RateQuote};

/// Trait for bank rate sources.
///
/// Implement this trait to add support for a new source of posted
/// buy/sell rates. The resolver owns exactly one source and treats any
/// error it returns as the signal to serve fallback rates; sources make
/// a single attempt and never retry.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "BANK_OF_TAIWAN". Used in log
    /// lines when resolution degrades.
    fn id(&self) -> &'static str;

    /// Fetch the posted buy/sell rates for a currency pair.
    ///
    /// # Returns
    ///
    /// A [`RateQuote`] on success, or a [`RateError`] when the rates
    /// could not be retrieved or extracted.
    async fn board_rates(&self, pair: &CurrencyPair) -> Result<RateQuote, RateError>;
}
