//! Rate resolution pipeline.
//!
//! The resolver asks its source for the bank's posted rates, derives the
//! marked-up provider rate from the sell side, and degrades to the
//! configured static rates when the source fails. Resolution never
//! errors; degraded responses are tagged [`QuoteSource::Fallback`] and
//! carry a note.

use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::models::{CurrencyPair, QuoteSource, RateQuote, StaticRates};
use crate::source::RateSource;

/// Decimal places of the derived rate.
const DERIVED_RATE_DP: u32 = 4;

/// Note attached to responses built from static rates.
pub const STATIC_RATES_NOTE: &str =
    "Static rates in use; refer to the bank's site for current rates.";

/// Resolver output: the quote plus the derived markup rate.
#[derive(Clone, Debug)]
pub struct ResolvedRate {
    /// The bank quote the rates were derived from
    pub quote: RateQuote,
    /// Reference rate for the markup, the bank sell rate
    pub base_rate: Decimal,
    /// Markup ratio applied to the base rate
    pub markup: Decimal,
    /// `base_rate * markup`, rounded to four decimal places
    pub derived_rate: Decimal,
    /// Set when the rates are not live bank data
    pub note: Option<String>,
}

/// Resolves a marked-up rate from a bank rate source.
///
/// Holds no cross-request state; concurrent resolutions share nothing
/// mutable. The single blocking point is the source's network fetch,
/// bounded by the source's own timeout.
pub struct RateResolver {
    source: Arc<dyn RateSource>,
    fallback: StaticRates,
    markup: Decimal,
}

impl RateResolver {
    /// Create a resolver over `source` with the given fallback rates and
    /// markup ratio.
    pub fn new(source: Arc<dyn RateSource>, fallback: StaticRates, markup: Decimal) -> Self {
        Self {
            source,
            fallback,
            markup,
        }
    }

    /// Resolve the current rate for `pair`.
    ///
    /// Never fails: network and parse errors from the source are
    /// absorbed and answered with the configured static rates. A single
    /// attempt is made; the fallback already guarantees availability,
    /// so there is no retry.
    pub async fn resolve(&self, pair: &CurrencyPair) -> ResolvedRate {
        match self.source.board_rates(pair).await {
            Ok(quote) => {
                debug!(
                    "{} quote for {}: buy {} sell {}",
                    self.source.id(),
                    pair,
                    quote.buy_rate,
                    quote.sell_rate
                );
                self.assemble(quote)
            }
            Err(err) => {
                warn!(
                    "{} {:?} failure for {}: {}; serving static rates",
                    self.source.id(),
                    err.class(),
                    pair,
                    err
                );
                self.assemble(RateQuote::fallback(&self.fallback))
            }
        }
    }

    fn assemble(&self, quote: RateQuote) -> ResolvedRate {
        // The sell side is the reference: the derived rate models what a
        // consumer pays to acquire the foreign currency.
        let base_rate = quote.sell_rate;
        let derived_rate = (base_rate * self.markup).round_dp(DERIVED_RATE_DP);
        let note = match quote.source {
            QuoteSource::Live => None,
            QuoteSource::Fallback => Some(STATIC_RATES_NOTE.to_string()),
        };

        ResolvedRate {
            quote,
            base_rate,
            markup: self.markup,
            derived_rate,
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RateError;
    use crate::models::RateQuote;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    enum StubSource {
        Quote(Decimal, Decimal),
        Unreachable,
        NoRow,
    }

    #[async_trait]
    impl RateSource for StubSource {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn board_rates(&self, pair: &CurrencyPair) -> Result<RateQuote, RateError> {
            match self {
                StubSource::Quote(buy, sell) => Ok(RateQuote::live(*buy, *sell)),
                StubSource::Unreachable => Err(RateError::Status(503)),
                StubSource::NoRow => Err(RateError::RowNotFound(pair.base().to_string())),
            }
        }
    }

    fn fallback_rates() -> StaticRates {
        StaticRates {
            buy_rate: dec!(29.425),
            sell_rate: dec!(29.575),
        }
    }

    fn resolver(source: StubSource) -> RateResolver {
        RateResolver::new(Arc::new(source), fallback_rates(), dec!(1.10))
    }

    #[tokio::test]
    async fn test_live_quote_derives_markup_from_sell_side() {
        let resolver = resolver(StubSource::Quote(dec!(29.425), dec!(29.575)));
        let resolved = resolver.resolve(&CurrencyPair::usd_twd()).await;

        assert_eq!(resolved.quote.source, QuoteSource::Live);
        assert_eq!(resolved.quote.buy_rate, dec!(29.425));
        assert_eq!(resolved.quote.sell_rate, dec!(29.575));
        assert_eq!(resolved.base_rate, dec!(29.575));
        assert_eq!(resolved.derived_rate, dec!(32.5325));
        assert!(resolved.note.is_none());
    }

    #[tokio::test]
    async fn test_derived_rate_rounds_to_four_places() {
        let resolver = resolver(StubSource::Quote(dec!(10.1000), dec!(10.1234)));
        let resolved = resolver.resolve(&CurrencyPair::usd_twd()).await;

        // 10.1234 * 1.10 = 11.13574
        assert_eq!(resolved.derived_rate, dec!(11.1357));
    }

    #[tokio::test]
    async fn test_unreachable_source_degrades_to_static_rates() {
        let resolver = resolver(StubSource::Unreachable);
        let resolved = resolver.resolve(&CurrencyPair::usd_twd()).await;

        assert_eq!(resolved.quote.source, QuoteSource::Fallback);
        assert_eq!(resolved.base_rate, dec!(29.575));
        assert_eq!(resolved.derived_rate, dec!(32.5325));
        assert_eq!(resolved.note.as_deref(), Some(STATIC_RATES_NOTE));
    }

    #[tokio::test]
    async fn test_parse_failure_degrades_to_static_rates() {
        let resolver = resolver(StubSource::NoRow);
        let resolved = resolver.resolve(&CurrencyPair::usd_twd()).await;

        assert_eq!(resolved.quote.source, QuoteSource::Fallback);
        assert_eq!(resolved.quote.buy_rate, dec!(29.425));
        assert_eq!(resolved.quote.sell_rate, dec!(29.575));
    }

    #[tokio::test]
    async fn test_degraded_responses_are_stable_across_calls() {
        let resolver = resolver(StubSource::Unreachable);
        let pair = CurrencyPair::usd_twd();

        let first = resolver.resolve(&pair).await;
        let second = resolver.resolve(&pair).await;

        assert_eq!(first.quote.buy_rate, second.quote.buy_rate);
        assert_eq!(first.quote.sell_rate, second.quote.sell_rate);
        assert_eq!(first.base_rate, second.base_rate);
        assert_eq!(first.derived_rate, second.derived_rate);
        assert_eq!(first.note, second.note);
        assert_eq!(first.quote.source, second.quote.source);
    }
}
