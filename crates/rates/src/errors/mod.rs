//! Error types for rate retrieval and parsing.
//!
//! Every variant here is absorbed by the resolver and converted into a
//! fallback response; none of them crosses the HTTP boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classification of a [`RateError`].
///
/// The resolver logs the class alongside the error so the fallback
/// reason states which pipeline stage failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// The bank page could not be fetched (timeout, DNS, connection,
    /// non-2xx status).
    Network,
    /// The page was fetched but the rate row could not be extracted.
    Parse,
}

/// Errors that can occur while retrieving a bank rate quote.
#[derive(Error, Debug)]
pub enum RateError {
    /// A network-layer failure while fetching the rate page.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The rate page answered with a non-success status.
    #[error("Unexpected status from rate page: {0}")]
    Status(u16),

    /// No board row matched any of the currency's known labels.
    #[error("No rate row found for {0}")]
    RowNotFound(String),

    /// A matched row did not carry the expected number of cells.
    #[error("Rate row has {found} cells, expected at least {expected}")]
    FieldCount {
        /// Minimum number of cells a usable row carries
        expected: usize,
        /// Number of cells actually found
        found: usize,
    },

    /// A spot rate cell did not parse as a decimal number.
    #[error("Non-numeric spot {field} rate: {value:?}")]
    NonNumeric {
        /// Which side of the spread failed to parse
        field: &'static str,
        /// The offending cell text
        value: String,
    },

    /// Parsed rates violate the board invariant `sell >= buy >= 0`.
    #[error("Invalid spot spread: buy {buy}, sell {sell}")]
    InvalidSpread {
        /// Parsed spot buy rate
        buy: Decimal,
        /// Parsed spot sell rate
        sell: Decimal,
    },
}

impl RateError {
    /// Returns the classification for this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Network(_) | Self::Status(_) => ErrorClass::Network,

            Self::RowNotFound(_)
            | Self::FieldCount { .. }
            | Self::NonNumeric { .. }
            | Self::InvalidSpread { .. } => ErrorClass::Parse,
        }
    }
}
