use serde::{Deserialize, Serialize};

use crate::themes::Theme;

/// An enriched news item as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub link: String,
    pub source: String,
    pub themes: Vec<Theme>,
    pub pub_date: String,
    pub time_ago: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A candidate article as reported by a news provider, before any filtering.
///
/// Every field is optional because providers routinely omit them; the
/// news fetcher decides what is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// One normalized instrument price record.
///
/// Numeric fields are pre-formatted to two fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub is_positive: bool,
}

/// The two numbers a quote is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSnapshot {
    pub price: f64,
    pub previous_close: f64,
}
