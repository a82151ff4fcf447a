//! News fetching, freshness filtering and enrichment.
//!
//! A [`NewsFetcher`] pulls one page of candidates from a [`NewsSource`],
//! drops anything outside the freshness window, decorates survivors with
//! themes and an age label, then drops anything without a title or link.
//! Provider failures never escape: they are logged and yield an empty list.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use fw_core::time::{format_age_at, is_fresh, parse_timestamp};
use fw_core::{classify, Article, NewsSource, RawArticle, Theme};
use reqwest::Client;
use scraper::Html;

use crate::logging::Logger;

pub mod newsapi;
pub mod newsdata;

pub use newsapi::NewsApiSource;
pub use newsdata::NewsDataSource;

/// Query value meaning "do not filter on this field".
pub const ALL: &str = "All";

/// Upstream news providers that can back the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NewsProvider {
    /// newsapi.org top headlines
    Newsapi,
    /// newsdata.io latest news
    Newsdata,
}

pub fn create_source(
    provider: NewsProvider,
    client: Client,
    api_key: Option<String>,
) -> Arc<dyn NewsSource> {
    match provider {
        NewsProvider::Newsapi => Arc::new(NewsApiSource::new(client, api_key)),
        NewsProvider::Newsdata => Arc::new(NewsDataSource::new(client, api_key)),
    }
}

pub struct NewsFetcher {
    source: Arc<dyn NewsSource>,
    logger: Logger,
}

impl NewsFetcher {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        let logger = Logger::new().with_prefix(format!("[news:{}]", source.name()));
        Self { source, logger }
    }

    pub async fn fetch_news(&self) -> Vec<Article> {
        self.fetch_news_at(Utc::now()).await
    }

    pub async fn fetch_news_at(&self, now: DateTime<Utc>) -> Vec<Article> {
        match self.source.fetch_candidates().await {
            Ok(candidates) => {
                let total = candidates.len();
                let articles = enrich_candidates(candidates, now);
                self.logger.debug(&format!(
                    "kept {} of {} candidate articles",
                    articles.len(),
                    total
                ));
                articles
            }
            Err(e) => {
                self.logger.warn(&format!("failed to fetch news: {}", e));
                Vec::new()
            }
        }
    }
}

/// Applies the freshness filter, enriches the survivors, then drops
/// articles missing a title or link. The order of the two filters matters.
pub fn enrich_candidates(candidates: Vec<RawArticle>, now: DateTime<Utc>) -> Vec<Article> {
    candidates
        .into_iter()
        .filter(|candidate| is_candidate_fresh(candidate, now))
        .map(|candidate| to_article(candidate, now))
        .filter(|article| !article.title.is_empty() && !article.link.is_empty())
        .collect()
}

fn is_candidate_fresh(candidate: &RawArticle, now: DateTime<Utc>) -> bool {
    match candidate.published_at.as_deref().and_then(parse_timestamp) {
        Some(published) => is_fresh(published, now),
        None => {
            tracing::debug!(
                "dropping article with unusable date: {}",
                candidate.title.as_deref().unwrap_or("<untitled>")
            );
            false
        }
    }
}

fn to_article(candidate: RawArticle, now: DateTime<Utc>) -> Article {
    let title = normalize(candidate.title);
    let pub_date = candidate.published_at.unwrap_or_default();

    Article {
        themes: classify(&title),
        time_ago: format_age_at(&pub_date, now),
        link: normalize(candidate.link),
        source: normalize(candidate.source),
        description: candidate.description.as_deref().and_then(clean_description),
        image_url: candidate.image_url.filter(|url| !url.trim().is_empty()),
        title,
        pub_date,
    }
}

fn normalize(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Strips markup some providers leave in descriptions.
pub fn clean_description(raw: &str) -> Option<String> {
    let fragment = Html::parse_fragment(raw);
    let text = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}

fn is_active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

/// Narrows articles by exact source, then by theme name.
///
/// `None`, an empty string or [`ALL`] disables a filter. An unknown theme
/// name matches nothing.
pub fn filter_articles(
    articles: Vec<Article>,
    source: Option<&str>,
    theme: Option<&str>,
) -> Vec<Article> {
    let mut articles = articles;

    if let Some(source) = is_active_filter(source) {
        articles.retain(|article| article.source == source);
    }

    if let Some(theme) = is_active_filter(theme) {
        match theme.parse::<Theme>() {
            Ok(theme) => articles.retain(|article| article.themes.contains(&theme)),
            Err(_) => articles.clear(),
        }
    }

    articles
}

/// Distinct non-empty source identifiers in first-seen order.
pub fn distinct_sources(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();
    for article in articles {
        if !article.source.is_empty() && seen.insert(article.source.as_str()) {
            sources.push(article.source.clone());
        }
    }
    sources
}

/// The `limit` most recently published articles, newest first.
pub fn freshest(mut articles: Vec<Article>, limit: usize) -> Vec<Article> {
    articles.sort_by_key(|article| Reverse(parse_timestamp(&article.pub_date)));
    articles.truncate(limit);
    articles
}
