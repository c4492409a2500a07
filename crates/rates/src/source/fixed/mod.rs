//! Fixed rate source.
//!
//! Serves the configured static rates without touching the network.
//! Selected by configuration when the live board should not be fetched,
//! for local development and tests.

use async_trait::async_trait;

use crate::errors::RateError;
use crate::models::{CurrencyPair, RateQuote, StaticRates};
use crate::source::RateSource;

/// Source ID constant
const SOURCE_ID: &str = "FIXED";

/// Rate source returning a configured static pair.
pub struct FixedRateSource {
    rates: StaticRates,
}

impl FixedRateSource {
    /// Create a fixed source serving the given rates.
    pub fn new(rates: StaticRates) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn board_rates(&self, _pair: &CurrencyPair) -> Result<RateQuote, RateError> {
        Ok(RateQuote::fallback(&self.rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteSource;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_serves_configured_rates() {
        let source = FixedRateSource::new(StaticRates {
            buy_rate: dec!(29.425),
            sell_rate: dec!(29.575),
        });
        let quote = source
            .board_rates(&CurrencyPair::usd_twd())
            .await
            .unwrap();
        assert_eq!(quote.buy_rate, dec!(29.425));
        assert_eq!(quote.sell_rate, dec!(29.575));
        assert_eq!(quote.source, QuoteSource::Fallback);
    }

    #[test]
    fn test_source_id() {
        let source = FixedRateSource::new(StaticRates {
            buy_rate: dec!(1),
            sell_rate: dec!(1),
        });
        assert_eq!(source.id(), "FIXED");
    }
}
