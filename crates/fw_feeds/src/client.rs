use std::time::Duration;

use fw_core::Result;
use reqwest::Client;

/// Settings shared by every outbound provider request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            // news and chart providers both reject requests without a browser-like agent
            user_agent: "Mozilla/5.0 (compatible; finwire/0.1)".to_string(),
            timeout_seconds: 15,
        }
    }
}

pub fn build_client(config: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_seconds, 15);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_build_client() {
        let config = FetchConfig {
            user_agent: "test-agent".to_string(),
            timeout_seconds: 1,
        };
        assert!(build_client(&config).is_ok());
    }
}
