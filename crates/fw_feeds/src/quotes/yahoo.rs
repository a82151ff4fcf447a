use async_trait::async_trait;
use fw_core::{ChartSnapshot, Error, QuoteSource, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    chart: Option<Chart>,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
}

impl ChartEnvelope {
    pub fn into_snapshot(self) -> Result<ChartSnapshot> {
        let meta = self
            .chart
            .and_then(|chart| chart.result)
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.meta)
            .ok_or_else(|| Error::Payload("chart has no result".to_string()))?;

        let price = meta
            .regular_market_price
            .ok_or_else(|| Error::Payload("chart has no regularMarketPrice".to_string()))?;
        let previous_close = meta
            .previous_close
            .or(meta.chart_previous_close)
            .ok_or_else(|| Error::Payload("chart has no previous close".to_string()))?;

        Ok(ChartSnapshot {
            price,
            previous_close,
        })
    }
}

/// Per-symbol daily chart lookups.
pub struct YahooChartSource {
    client: Client,
    base_url: Url,
}

impl YahooChartSource {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn chart_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(symbol);
        }
        url
    }
}

#[async_trait]
impl QuoteSource for YahooChartSource {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<ChartSnapshot> {
        let envelope = self
            .client
            .get(self.chart_url(symbol))
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await?
            .error_for_status()?
            .json::<ChartEnvelope>()
            .await?;

        envelope.into_snapshot()
    }
}
