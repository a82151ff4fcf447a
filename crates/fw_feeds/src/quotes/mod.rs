//! Market quotes for a fixed instrument list.
//!
//! Every symbol is requested concurrently and independently; a failing
//! symbol is logged and left out without affecting its siblings.

use std::sync::Arc;

use futures::future::join_all;
use fw_core::{ChartSnapshot, Quote, QuoteSource};

use crate::logging::Logger;

pub mod yahoo;

pub use yahoo::YahooChartSource;

/// Instruments shown on the dashboard ticker, in display order.
pub const SYMBOLS: &[&str] = &[
    // indices
    "^GSPC", "^DJI", "^IXIC", "^FTSE", "^N225",
    // large caps
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "JPM", "V", "WMT",
    // futures: gold, crude, silver, platinum, natural gas
    "GC=F", "CL=F", "SI=F", "PL=F", "NG=F",
];

pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    symbols: Vec<String>,
    logger: Logger,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self::with_symbols(source, SYMBOLS.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_symbols(source: Arc<dyn QuoteSource>, symbols: Vec<String>) -> Self {
        let logger = Logger::new().with_prefix(format!("[quotes:{}]", source.name()));
        Self {
            source,
            symbols,
            logger,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Quotes for every symbol that resolved, in symbol-list order.
    pub async fn fetch_quotes(&self) -> Vec<Quote> {
        let lookups = self.symbols.iter().map(|symbol| self.fetch_quote(symbol));
        let quotes: Vec<Quote> = join_all(lookups).await.into_iter().flatten().collect();

        self.logger.debug(&format!(
            "resolved {} of {} symbols",
            quotes.len(),
            self.symbols.len()
        ));
        quotes
    }

    async fn fetch_quote(&self, symbol: &str) -> Option<Quote> {
        let logger = self.logger.clone().with_prefix(format!("[{}]", symbol));

        match self.source.fetch_snapshot(symbol).await {
            Ok(snapshot) => {
                let quote = to_quote(symbol, snapshot);
                if quote.is_none() {
                    logger.warn(&format!("unusable chart data: {:?}", snapshot));
                }
                quote
            }
            Err(e) => {
                logger.warn(&format!("failed to fetch quote: {}", e));
                None
            }
        }
    }
}

/// Strips index (`^`) and futures (`=F`) notation for display.
pub fn display_symbol(symbol: &str) -> String {
    let symbol = symbol.strip_prefix('^').unwrap_or(symbol);
    let symbol = symbol.strip_suffix("=F").unwrap_or(symbol);
    symbol.to_string()
}

/// Derives change figures from a chart snapshot.
///
/// Returns `None` unless both values are finite and the previous close is
/// positive.
pub fn to_quote(symbol: &str, snapshot: ChartSnapshot) -> Option<Quote> {
    let ChartSnapshot {
        price,
        previous_close,
    } = snapshot;

    if !price.is_finite() || !previous_close.is_finite() || previous_close <= 0.0 {
        return None;
    }

    let change = price - previous_close;
    let change_percent = change / previous_close * 100.0;

    Some(Quote {
        symbol: display_symbol(symbol),
        price: format!("{:.2}", price),
        change: format!("{:.2}", change),
        change_percent: format!("{:.2}", change_percent),
        is_positive: change >= 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fw_core::{Error, Result};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    struct MockQuotes {
        snapshots: HashMap<&'static str, ChartSnapshot>,
        calls: AtomicUsize,
    }

    impl MockQuotes {
        fn new(snapshots: &[(&'static str, f64, f64)]) -> Self {
            Self {
                snapshots: snapshots
                    .iter()
                    .map(|(symbol, price, previous_close)| {
                        (
                            *symbol,
                            ChartSnapshot {
                                price: *price,
                                previous_close: *previous_close,
                            },
                        )
                    })
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for MockQuotes {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_snapshot(&self, symbol: &str) -> Result<ChartSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.snapshots
                .get(symbol)
                .copied()
                .ok_or_else(|| Error::Payload(format!("no chart result for {}", symbol)))
        }
    }

    /// Only completes once every symbol is in flight at the same time.
    struct BarrierQuotes {
        barrier: Barrier,
    }

    #[async_trait]
    impl QuoteSource for BarrierQuotes {
        fn name(&self) -> &str {
            "barrier"
        }

        async fn fetch_snapshot(&self, _symbol: &str) -> Result<ChartSnapshot> {
            self.barrier.wait().await;
            Ok(ChartSnapshot {
                price: 10.0,
                previous_close: 8.0,
            })
        }
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol("^GSPC"), "GSPC");
        assert_eq!(display_symbol("GC=F"), "GC");
        assert_eq!(display_symbol("AAPL"), "AAPL");
        assert_eq!(display_symbol("V"), "V");
    }

    #[test]
    fn test_to_quote_math() {
        let quote = to_quote(
            "^GSPC",
            ChartSnapshot {
                price: 5100.0,
                previous_close: 5000.0,
            },
        )
        .unwrap();
        assert_eq!(quote.symbol, "GSPC");
        assert_eq!(quote.price, "5100.00");
        assert_eq!(quote.change, "100.00");
        assert_eq!(quote.change_percent, "2.00");
        assert!(quote.is_positive);

        let quote = to_quote(
            "CL=F",
            ChartSnapshot {
                price: 76.0,
                previous_close: 80.0,
            },
        )
        .unwrap();
        assert_eq!(quote.symbol, "CL");
        assert_eq!(quote.change, "-4.00");
        assert_eq!(quote.change_percent, "-5.00");
        assert!(!quote.is_positive);
    }

    #[test]
    fn test_unchanged_price_counts_as_positive() {
        let quote = to_quote(
            "MSFT",
            ChartSnapshot {
                price: 410.0,
                previous_close: 410.0,
            },
        )
        .unwrap();
        assert_eq!(quote.change, "0.00");
        assert!(quote.is_positive);
    }

    #[test]
    fn test_unusable_snapshots() {
        let zero_close = ChartSnapshot {
            price: 1.0,
            previous_close: 0.0,
        };
        let nan_price = ChartSnapshot {
            price: f64::NAN,
            previous_close: 1.0,
        };
        let negative_close = ChartSnapshot {
            price: 10.0,
            previous_close: -5.0,
        };
        assert!(to_quote("X", zero_close).is_none());
        assert!(to_quote("X", nan_price).is_none());
        assert!(to_quote("CL=F", negative_close).is_none());
    }

    #[tokio::test]
    async fn test_failures_are_skipped_in_place() {
        let source = Arc::new(MockQuotes::new(&[
            ("^GSPC", 5100.0, 5000.0),
            ("GC=F", 2100.0, 2110.0),
            ("AAPL", 170.0, 0.0),
        ]));
        let symbols = ["^GSPC", "^DJI", "AAPL", "GC=F"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let fetcher = QuoteFetcher::with_symbols(source.clone(), symbols);

        let quotes = fetcher.fetch_quotes().await;
        let shown: Vec<_> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(shown, vec!["GSPC", "GC"]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_default_symbol_list_is_attempted_once_each() {
        let source = Arc::new(MockQuotes::new(&[]));
        let fetcher = QuoteFetcher::new(source.clone());

        assert!(fetcher.fetch_quotes().await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), SYMBOLS.len());
        assert_eq!(fetcher.symbols().len(), 20);
    }

    #[tokio::test]
    async fn test_symbols_are_fetched_concurrently() {
        let source = Arc::new(BarrierQuotes {
            barrier: Barrier::new(SYMBOLS.len()),
        });
        let fetcher = QuoteFetcher::new(source);

        let quotes = tokio::time::timeout(Duration::from_secs(5), fetcher.fetch_quotes())
            .await
            .expect("lookups ran sequentially");
        assert_eq!(quotes.len(), SYMBOLS.len());
        assert_eq!(quotes[0].symbol, "GSPC");
        assert_eq!(quotes[19].symbol, "NG");
    }
}
