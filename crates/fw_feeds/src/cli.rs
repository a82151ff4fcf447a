use clap::{Args, Subcommand};
use fw_core::Result;
use serde::Serialize;

use crate::news::{distinct_sources, filter_articles, NewsFetcher};
use crate::quotes::QuoteFetcher;

#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: FeedCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FeedCommands {
    /// Fetch fresh business headlines
    News {
        /// Only keep articles from this source (or "All")
        #[arg(long)]
        source: Option<String>,
        /// Only keep articles tagged with this theme (or "All")
        #[arg(long)]
        theme: Option<String>,
    },
    /// List the sources present in the current headlines
    Sources,
    /// Fetch quotes for the configured instruments
    Quotes,
}

#[derive(Serialize)]
struct SourcesResponse {
    sources: Vec<String>,
}

pub async fn handle_command(
    args: FeedArgs,
    news: &NewsFetcher,
    quotes: &QuoteFetcher,
) -> Result<()> {
    match args.command {
        FeedCommands::News { source, theme } => {
            let articles = news.fetch_news().await;
            let articles = filter_articles(articles, source.as_deref(), theme.as_deref());
            print_json(&articles)
        }
        FeedCommands::Sources => {
            let articles = news.fetch_news().await;
            print_json(&SourcesResponse {
                sources: distinct_sources(&articles),
            })
        }
        FeedCommands::Quotes => print_json(&quotes.fetch_quotes().await),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: FeedCommands,
    }

    #[test]
    fn test_parse_news_filters() {
        let cli = TestCli::parse_from(["fw", "news", "--source", "cnbc", "--theme", "Crypto"]);
        match cli.command {
            FeedCommands::News { source, theme } => {
                assert_eq!(source.as_deref(), Some("cnbc"));
                assert_eq!(theme.as_deref(), Some("Crypto"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_quotes() {
        let cli = TestCli::parse_from(["fw", "quotes"]);
        assert!(matches!(cli.command, FeedCommands::Quotes));
    }
}
