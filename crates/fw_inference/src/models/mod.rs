use std::sync::Arc;

use fw_core::{Result, SummaryModel};
use reqwest::Client;

use crate::Config;

pub mod bart;

pub use bart::{BartSummarizer, SummarizationParameters, BART_LARGE_CNN_URL};

/// Builds the configured summarization model.
///
/// Fails when no API key is configured; callers are expected to fall back
/// to undigested drafts in that case.
pub fn create_model(config: &Config, client: Client) -> Result<Arc<dyn SummaryModel>> {
    let model = BartSummarizer::new(client, config.api_key.clone())?;
    let model = match config.model_url.as_deref() {
        Some(url) if !url.is_empty() => model.with_endpoint(url),
        _ => model,
    };
    Ok(Arc::new(model))
}
