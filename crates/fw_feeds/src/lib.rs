pub mod cli;
pub mod client;
pub mod logging;
pub mod news;
pub mod quotes;

pub use cli::{handle_command, FeedArgs, FeedCommands};
pub use client::{build_client, FetchConfig};
pub use logging::{init_logging, Logger};
pub use news::{NewsFetcher, NewsProvider};
pub use quotes::QuoteFetcher;

pub mod prelude {
    pub use super::news::{NewsFetcher, NewsProvider};
    pub use super::quotes::QuoteFetcher;
    pub use fw_core::{Article, Error, Quote, Result};
}
