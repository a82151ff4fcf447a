//! Daily digest of the current headlines.
//!
//! Articles are grouped into three overlapping buckets and rendered into a
//! plain-text draft. When a summarization model is available the draft is
//! replaced by the model's abstractive summary; any model failure falls
//! back to the draft itself.

use std::sync::Arc;

use fw_core::{Article, SummaryModel, Theme};
use tracing::{debug, warn};

pub const NO_UPDATES: &str = "No major news updates in the last 24 hours.";

const HEADER: &str = "Financial news digest:";
const TITLES_PER_BUCKET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    MarketMoving,
    Economic,
    Other,
}

impl Bucket {
    pub const ORDER: [Bucket; 3] = [Bucket::MarketMoving, Bucket::Economic, Bucket::Other];

    pub fn heading(&self) -> &'static str {
        match self {
            Bucket::MarketMoving => "Market-moving news:",
            Bucket::Economic => "Economic news:",
            Bucket::Other => "Other news:",
        }
    }

    /// Buckets overlap: an article tagged both Markets and Economy lands in both.
    pub fn contains(&self, article: &Article) -> bool {
        let has = |theme| article.themes.contains(&theme);
        let market = has(Theme::Markets) || has(Theme::Stocks);
        let economic = has(Theme::Economy) || has(Theme::Banking);

        match self {
            Bucket::MarketMoving => market,
            Bucket::Economic => economic,
            Bucket::Other => !market && !economic,
        }
    }
}

/// Either the model's summary or the locally rendered draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    Summary(String),
    Draft(String),
}

impl Digest {
    pub fn text(&self) -> &str {
        match self {
            Digest::Summary(text) | Digest::Draft(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Digest::Summary(text) | Digest::Draft(text) => text,
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Digest::Summary(_))
    }
}

/// Up to three leading titles per non-empty bucket, in bucket order.
pub fn bucket_titles(articles: &[Article]) -> Vec<(Bucket, Vec<&str>)> {
    Bucket::ORDER
        .into_iter()
        .map(|bucket| {
            let titles = articles
                .iter()
                .filter(|article| bucket.contains(article))
                .take(TITLES_PER_BUCKET)
                .map(|article| article.title.as_str())
                .collect::<Vec<_>>();
            (bucket, titles)
        })
        .filter(|(_, titles)| !titles.is_empty())
        .collect()
}

/// Renders the plain-text draft, or `None` when there is nothing to report.
pub fn render_draft(articles: &[Article]) -> Option<String> {
    if articles.is_empty() {
        return None;
    }

    let mut draft = String::from(HEADER);
    for (bucket, titles) in bucket_titles(articles) {
        draft.push_str("\n\n");
        draft.push_str(bucket.heading());
        for title in titles {
            draft.push_str("\n- ");
            draft.push_str(title);
        }
    }
    Some(draft)
}

pub struct DigestGenerator {
    model: Option<Arc<dyn SummaryModel>>,
}

impl DigestGenerator {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn without_model() -> Self {
        Self { model: None }
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(|model| model.name())
    }

    pub async fn generate_digest(&self, articles: &[Article]) -> Digest {
        let Some(draft) = render_draft(articles) else {
            return Digest::Draft(NO_UPDATES.to_string());
        };

        let Some(model) = &self.model else {
            debug!("no summarization model configured, serving draft digest");
            return Digest::Draft(draft);
        };

        match model.summarize(&draft).await {
            Ok(summary) if !summary.trim().is_empty() => Digest::Summary(summary.trim().to_string()),
            Ok(_) => {
                warn!("{} returned an empty summary, serving draft digest", model.name());
                Digest::Draft(draft)
            }
            Err(e) => {
                warn!("{} summarization failed, serving draft digest: {}", model.name(), e);
                Digest::Draft(draft)
            }
        }
    }
}
