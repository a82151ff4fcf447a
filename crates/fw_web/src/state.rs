use fw_feeds::{NewsFetcher, QuoteFetcher};
use fw_inference::DigestGenerator;

/// Per-process collaborators; every request recomputes its data from them.
pub struct AppState {
    pub news: NewsFetcher,
    pub quotes: QuoteFetcher,
    pub digest: DigestGenerator,
}
