use std::fmt;

use async_trait::async_trait;
use fw_core::{Error, Result, SummaryModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const BART_LARGE_CNN_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Fixed decoding settings: bounded length, beam search, no sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummarizationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub num_beams: u32,
    pub do_sample: bool,
}

impl Default for SummarizationParameters {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 40,
            num_beams: 4,
            do_sample: false,
        }
    }
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Deserialize)]
struct SummaryText {
    summary_text: String,
}

/// Pulls the summary out of a `[{"summary_text": ...}]` response.
pub fn extract_summary(payload: serde_json::Value) -> Result<String> {
    let outputs: Vec<SummaryText> = serde_json::from_value(payload)
        .map_err(|e| Error::Inference(format!("unexpected summarization response: {}", e)))?;

    outputs
        .into_iter()
        .map(|output| output.summary_text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or_else(|| Error::Inference("summarization response contained no text".to_string()))
}

/// Abstractive summaries from a hosted BART model.
pub struct BartSummarizer {
    client: Client,
    api_key: String,
    endpoint: String,
    parameters: SummarizationParameters,
}

impl fmt::Debug for BartSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BartSummarizer")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl BartSummarizer {
    pub fn new(client: Client, api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingCredential("HUGGINGFACE_API_KEY"))?;

        Ok(Self {
            client,
            api_key,
            endpoint: BART_LARGE_CNN_URL.to_string(),
            parameters: SummarizationParameters::default(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn parameters(&self) -> SummarizationParameters {
        self.parameters
    }
}

#[async_trait]
impl SummaryModel for BartSummarizer {
    fn name(&self) -> &str {
        "bart-large-cnn"
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: self.parameters,
        };

        let payload = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        extract_summary(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_requires_api_key() {
        let result = BartSummarizer::new(Client::new(), None);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Missing credential: HUGGINGFACE_API_KEY"
        );

        assert!(BartSummarizer::new(Client::new(), Some(String::new())).is_err());
        assert!(BartSummarizer::new(Client::new(), Some("hf_test".to_string())).is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let model = BartSummarizer::new(Client::new(), Some("hf_secret".to_string())).unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = SummarizationRequest {
            inputs: "Financial news digest:",
            parameters: SummarizationParameters::default(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "inputs": "Financial news digest:",
                "parameters": {
                    "max_length": 150,
                    "min_length": 40,
                    "num_beams": 4,
                    "do_sample": false
                }
            })
        );
    }

    #[test]
    fn test_extract_summary() {
        let summary = extract_summary(json!([{ "summary_text": "  Stocks rose.  " }])).unwrap();
        assert_eq!(summary, "Stocks rose.");
    }

    #[test]
    fn test_extract_summary_rejects_unexpected_shapes() {
        assert!(extract_summary(json!({ "error": "Model is currently loading" })).is_err());
        assert!(extract_summary(json!([])).is_err());
        assert!(extract_summary(json!([{ "generated_text": "x" }])).is_err());
        assert!(extract_summary(json!([{ "summary_text": "   " }])).is_err());
    }
}
