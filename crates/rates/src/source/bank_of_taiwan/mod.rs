//! Bank of Taiwan rate board source.
//!
//! This source fetches the bank's public exchange-rate page and extracts
//! the spot buy/sell rates for a currency pair from its HTML rate table.
//! The page layout is not under our control; any surprise in it surfaces
//! as a parse error and the resolver degrades to static rates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use scraper::{Html, Selector};

use crate::errors::RateError;
use crate::models::{CurrencyPair, RateQuote};
use crate::source::RateSource;

/// Source ID constant
const SOURCE_ID: &str = "BANK_OF_TAIWAN";

/// The published rate board: HTML with one table row per currency.
pub const DEFAULT_BOARD_URL: &str = "https://rate.bot.com.tw/xrt?Lang=zh-TW";

/// The board rejects requests without a browser-like identity.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default HTTP request timeout
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Cell positions within a board row. The currency label leads, cash
/// buy/sell follow, the spot buy/sell pair sits at indices 3 and 4.
const SPOT_BUY_CELL: usize = 3;
const SPOT_SELL_CELL: usize = 4;
const MIN_ROW_CELLS: usize = 5;

/// Bank of Taiwan rate board source.
pub struct BankOfTaiwanSource {
    client: Client,
    board_url: String,
}

impl BankOfTaiwanSource {
    /// Create a source against the given board URL with a bounded fetch
    /// timeout.
    pub fn new(board_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            board_url: board_url.into(),
        }
    }
}

impl Default for BankOfTaiwanSource {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_URL, FETCH_TIMEOUT)
    }
}

#[async_trait]
impl RateSource for BankOfTaiwanSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn board_rates(&self, pair: &CurrencyPair) -> Result<RateQuote, RateError> {
        let response = self.client.get(&self.board_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_board(&body, pair)
    }
}

/// Extract the spot buy/sell rates for `pair` from the board HTML.
///
/// Rows are matched on their currency cell against the pair's label set;
/// the first matching row wins. A matched row that cannot be read in
/// full is an error, not a reason to keep scanning.
fn parse_board(html: &str, pair: &CurrencyPair) -> Result<RateQuote, RateError> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").expect("valid selector");
    let cell_selector = Selector::parse("td").expect("valid selector");

    let labels = pair.row_labels();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        let Some(currency_cell) = cells.first() else {
            continue;
        };
        if !labels.iter().any(|label| currency_cell.contains(label)) {
            continue;
        }

        if cells.len() < MIN_ROW_CELLS {
            return Err(RateError::FieldCount {
                expected: MIN_ROW_CELLS,
                found: cells.len(),
            });
        }

        let buy = parse_rate_cell("buy", &cells[SPOT_BUY_CELL])?;
        let sell = parse_rate_cell("sell", &cells[SPOT_SELL_CELL])?;

        // The bank sells higher than it buys; a row that says otherwise
        // is corrupt and must not be surfaced as data.
        if sell < buy || buy < Decimal::ZERO {
            return Err(RateError::InvalidSpread { buy, sell });
        }

        return Ok(RateQuote::live(buy, sell));
    }

    Err(RateError::RowNotFound(pair.base().to_string()))
}

fn parse_rate_cell(field: &'static str, value: &str) -> Result<Decimal, RateError> {
    value.parse::<Decimal>().map_err(|_| RateError::NonNumeric {
        field,
        value: value.to_string(),
    })
}
