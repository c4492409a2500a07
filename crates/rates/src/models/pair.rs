use std::fmt;

/// Currency every supported pair is quoted in.
pub const LOCAL_CURRENCY: &str = "TWD";

/// Labels the bank prints in the currency cell of a board row, keyed by
/// ISO code. The board may label a row by the code, the local-language
/// name, or both.
const ROW_LABELS: &[(&str, &[&str])] = &[("USD", &["USD", "美金"])];

fn lookup_labels(code: &str) -> Option<&'static [&'static str]> {
    ROW_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, labels)| *labels)
}

/// A currency pair the rate board carries.
///
/// Only pairs with a known label set, quoted in [`LOCAL_CURRENCY`], can
/// be constructed; anything else is rejected at the handler boundary
/// before it reaches the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyPair {
    base: String,
    quote: String,
}

impl CurrencyPair {
    /// The default pair: US dollar against the local currency.
    pub fn usd_twd() -> Self {
        Self {
            base: "USD".to_string(),
            quote: LOCAL_CURRENCY.to_string(),
        }
    }

    /// Parse a pair of the form `"USD/TWD"`.
    ///
    /// Returns `None` for malformed input and for pairs the board does
    /// not carry.
    pub fn parse(raw: &str) -> Option<Self> {
        let (base, quote) = raw.split_once('/')?;
        let base = base.trim().to_uppercase();
        let quote = quote.trim().to_uppercase();
        if quote != LOCAL_CURRENCY {
            return None;
        }
        lookup_labels(&base)?;
        Some(Self { base, quote })
    }

    /// ISO code of the foreign currency.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// ISO code of the local currency.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Labels that identify this currency's row on the board.
    pub fn row_labels(&self) -> &'static [&'static str] {
        lookup_labels(&self.base).unwrap_or(&[])
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_pair() {
        let pair = CurrencyPair::parse("USD/TWD").unwrap();
        assert_eq!(pair, CurrencyPair::usd_twd());
        assert_eq!(pair.base(), "USD");
        assert_eq!(pair.quote(), "TWD");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let pair = CurrencyPair::parse("usd/twd").unwrap();
        assert_eq!(pair, CurrencyPair::usd_twd());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(CurrencyPair::parse("USDTWD").is_none());
        assert!(CurrencyPair::parse("").is_none());
        assert!(CurrencyPair::parse("/").is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_pairs() {
        assert!(CurrencyPair::parse("EUR/TWD").is_none());
        assert!(CurrencyPair::parse("USD/JPY").is_none());
    }

    #[test]
    fn test_row_labels_include_code_and_local_name() {
        let labels = CurrencyPair::usd_twd().row_labels();
        assert!(labels.contains(&"USD"));
        assert!(labels.contains(&"美金"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyPair::usd_twd().to_string(), "USD/TWD");
    }
}
