use anyhow::Result;
use clap::Parser;
use fw_feeds::cli::print_json;
use fw_feeds::news::{create_source, freshest};
use fw_feeds::quotes::{yahoo::YAHOO_CHART_URL, YahooChartSource};
use fw_feeds::{
    build_client, handle_command, init_logging, FeedArgs, FetchConfig, NewsFetcher, NewsProvider,
    QuoteFetcher,
};
use fw_inference::{create_model, DigestGenerator};
use fw_web::handlers::{SummaryResponse, SUMMARY_ARTICLES};
use fw_web::{AppState, ServerConfig};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Financial headlines, quotes and digests", long_about = None)]
pub struct Cli {
    #[arg(long, env = "FW_HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 4001)]
    port: u16,

    #[arg(long, env = "FW_NEWS_PROVIDER", value_enum, default_value_t = NewsProvider::Newsapi)]
    news_provider: NewsProvider,

    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    news_api_key: Option<String>,

    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    summary_api_key: Option<String>,

    #[arg(long, env = "FW_SUMMARY_MODEL_URL")]
    summary_model_url: Option<String>,

    #[arg(long, default_value = YAHOO_CHART_URL)]
    quote_base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 15)]
    request_timeout: u64,

    #[arg(long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve,
    /// Run one feed pipeline and print the result as JSON
    Feeds(FeedArgs),
    /// Build the digest of the current headlines
    Digest,
}

fn build_state(cli: &Cli, client: Client) -> Result<AppState> {
    let news = NewsFetcher::new(create_source(
        cli.news_provider,
        client.clone(),
        cli.news_api_key.clone(),
    ));
    if cli.news_api_key.as_deref().map_or(true, str::is_empty) {
        warn!("⚠️ No news API key configured, headlines will be empty");
    }

    let quotes = QuoteFetcher::new(Arc::new(YahooChartSource::new(
        client.clone(),
        &cli.quote_base_url,
    )?));

    let config = fw_inference::Config {
        api_key: cli.summary_api_key.clone(),
        model_url: cli.summary_model_url.clone(),
    };
    let digest = match create_model(&config, client) {
        Ok(model) => {
            info!("🧠 Summarization model initialized (using {})", model.name());
            DigestGenerator::new(model)
        }
        Err(e) => {
            warn!("⚠️ {}, digests will be served as drafts", e);
            DigestGenerator::without_model()
        }
    };

    Ok(AppState {
        news,
        quotes,
        digest,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.log_level).with_prefix("[fw]".to_string());

    let client = build_client(&FetchConfig {
        timeout_seconds: cli.request_timeout,
        ..FetchConfig::default()
    })?;
    let state = build_state(&cli, client)?;
    logger.info(&format!("📰 News provider: {:?}", cli.news_provider));

    match cli.command {
        Commands::Serve => {
            let config = ServerConfig {
                host: cli.host,
                port: cli.port,
            };
            fw_web::serve(&config, state).await?;
        }
        Commands::Feeds(args) => {
            handle_command(args, &state.news, &state.quotes).await?;
        }
        Commands::Digest => {
            let articles = freshest(state.news.fetch_news().await, SUMMARY_ARTICLES);
            let digest = state.digest.generate_digest(&articles).await;
            print_json(&SummaryResponse {
                summary: digest.into_text(),
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_feeds::FeedCommands;

    #[test]
    fn test_parse_feed_news_filters() {
        let cli = Cli::try_parse_from([
            "fw",
            "--news-provider",
            "newsdata",
            "feeds",
            "news",
            "--source",
            "Reuters",
            "--theme",
            "Crypto",
        ])
        .unwrap();

        assert_eq!(cli.news_provider, NewsProvider::Newsdata);
        match cli.command {
            Commands::Feeds(FeedArgs {
                command: FeedCommands::News { source, theme },
            }) => {
                assert_eq!(source.as_deref(), Some("Reuters"));
                assert_eq!(theme.as_deref(), Some("Crypto"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "fw",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--request-timeout",
            "5",
            "--log-level",
            "debug",
            "serve",
        ])
        .unwrap();

        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.request_timeout, 5);
        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["fw", "digest"]).unwrap();
        assert_eq!(cli.quote_base_url, YAHOO_CHART_URL);
        assert_eq!(cli.request_timeout, 15);
        assert_eq!(cli.log_level, Level::INFO);
        assert!(matches!(cli.command, Commands::Digest));
    }

    #[test]
    fn test_rejects_unknown_provider() {
        assert!(Cli::try_parse_from(["fw", "--news-provider", "rss", "serve"]).is_err());
    }

    #[test]
    fn test_state_without_keys_degrades() {
        let cli = Cli::try_parse_from([
            "fw",
            "--news-api-key",
            "",
            "--summary-api-key",
            "",
            "serve",
        ])
        .unwrap();
        let state = build_state(&cli, Client::new()).unwrap();
        assert_eq!(state.digest.model_name(), None);
        assert_eq!(state.quotes.symbols().len(), 20);
    }
}
