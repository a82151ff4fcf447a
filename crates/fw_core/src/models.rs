use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait SummaryModel: Send + Sync {
    fn name(&self) -> &str;

    /// Produce an abstractive summary of a plain-text document
    async fn summarize(&self, text: &str) -> Result<String>;
}
