use async_trait::async_trait;

use crate::types::{ChartSnapshot, RawArticle};
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Fetches one page of candidate business headlines
    async fn fetch_candidates(&self) -> Result<Vec<RawArticle>>;
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetches the latest price and previous close for a provider symbol
    async fn fetch_snapshot(&self, symbol: &str) -> Result<ChartSnapshot>;
}
