use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};
use fw_core::{Article, Quote};
use fw_feeds::news::{distinct_sources, filter_articles, freshest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;
use crate::AppState;

/// Articles handed to the digest generator.
pub const SUMMARY_ARTICLES: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub source: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub sources: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A query that cannot be read as one source and one theme (such as a
/// repeated `source` key) matches nothing.
pub async fn news(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> Json<Vec<Article>> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            tracing::debug!("unreadable news filters: {}", e.body_text());
            return Json(Vec::new());
        }
    };

    let articles = state.news.fetch_news().await;
    Json(filter_articles(
        articles,
        query.source.as_deref(),
        query.theme.as_deref(),
    ))
}

pub async fn filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    let articles = state.news.fetch_news().await;
    Json(FiltersResponse {
        sources: distinct_sources(&articles),
    })
}

pub async fn stocks(State(state): State<Arc<AppState>>) -> Json<Vec<Quote>> {
    Json(state.quotes.fetch_quotes().await)
}

pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let articles = freshest(state.news.fetch_news().await, SUMMARY_ARTICLES);
    let digest = state.digest.generate_digest(&articles).await;
    tracing::debug!(
        "digest built from {} articles (model summary: {})",
        articles.len(),
        digest.is_summary()
    );
    Json(SummaryResponse {
        summary: digest.into_text(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
