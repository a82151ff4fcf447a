use async_trait::async_trait;
use fw_core::{Error, NewsSource, RawArticle, Result};
use reqwest::Client;
use serde::Deserialize;

pub const NEWSAPI_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Provider page size cap.
const PAGE_SIZE: &str = "100";

#[derive(Debug, Deserialize)]
pub struct TopHeadlines {
    #[serde(default)]
    articles: Option<Vec<NewsApiArticle>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    source: Option<NewsApiSourceRef>,
    published_at: Option<String>,
    description: Option<String>,
    url_to_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSourceRef {
    name: Option<String>,
}

impl TopHeadlines {
    pub fn into_candidates(self) -> Result<Vec<RawArticle>> {
        let articles = self
            .articles
            .ok_or_else(|| Error::Payload("newsapi response has no `articles` field".to_string()))?;

        Ok(articles
            .into_iter()
            .map(|article| RawArticle {
                title: article.title,
                link: article.url,
                source: article.source.and_then(|s| s.name),
                published_at: article.published_at,
                description: article.description,
                image_url: article.url_to_image,
            })
            .collect())
    }
}

/// newsapi.org top business headlines.
pub struct NewsApiSource {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl NewsApiSource {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoint: NEWSAPI_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "newsapi"
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
                ("apiKey", api_key),
                ("category", "business"),
                ("language", "en"),
                ("pageSize", PAGE_SIZE),
                ("sortBy", "publishedAt"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<TopHeadlines>()
            .await?;

        payload.into_candidates()
    }
}
