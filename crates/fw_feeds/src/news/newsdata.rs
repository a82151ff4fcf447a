use async_trait::async_trait;
use fw_core::{Error, NewsSource, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;

pub const NEWSDATA_URL: &str = "https://newsdata.io/api/1/news";

/// Free tier page size.
const PAGE_SIZE: &str = "10";

#[derive(Debug, Deserialize)]
pub struct LatestNews {
    #[serde(default)]
    results: Option<Vec<NewsDataArticle>>,
}

#[derive(Debug, Deserialize)]
struct NewsDataArticle {
    title: Option<String>,
    link: Option<String>,
    source_id: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
}

impl LatestNews {
    pub fn into_candidates(self) -> Result<Vec<RawArticle>> {
        let results = self
            .results
            .ok_or_else(|| Error::Payload("newsdata response has no `results` field".to_string()))?;

        Ok(results
            .into_iter()
            .map(|article| RawArticle {
                title: article.title,
                link: article.link,
                source: article.source_id,
                published_at: article.pub_date,
                description: article.description,
                image_url: article.image_url,
            })
            .collect())
    }
}

/// newsdata.io latest business news.
pub struct NewsDataSource {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl NewsDataSource {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoint: NEWSDATA_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl NewsSource for NewsDataSource {
    fn name(&self) -> &str {
        "newsdata"
    }

    async fn fetch_candidates(&self) -> Result<Vec<RawArticle>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(Error::MissingCredential("NEWS_API_KEY"))?;

        let payload = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("apikey", api_key),
                ("category", "business"),
                ("language", "en"),
                ("size", PAGE_SIZE),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<LatestNews>()
            .await?;

        payload.into_candidates()
    }
}
