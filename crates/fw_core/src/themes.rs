//! Keyword-based topical tagging of article titles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Markets,
    Stocks,
    Bonds,
    Commodities,
    Currencies,
    Crypto,
    Economy,
    Banking,
}

impl Theme {
    /// Every theme, in dictionary declaration order.
    pub const ALL: [Theme; 8] = [
        Theme::Markets,
        Theme::Stocks,
        Theme::Bonds,
        Theme::Commodities,
        Theme::Currencies,
        Theme::Crypto,
        Theme::Economy,
        Theme::Banking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Markets => "Markets",
            Theme::Stocks => "Stocks",
            Theme::Bonds => "Bonds",
            Theme::Commodities => "Commodities",
            Theme::Currencies => "Currencies",
            Theme::Crypto => "Crypto",
            Theme::Economy => "Economy",
            Theme::Banking => "Banking",
        }
    }

    /// Lowercase substrings that tag a title with this theme.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::Markets => &["market", "trading", "stock", "shares", "index"],
            Theme::Stocks => &["stock", "shares", "equity", "nasdaq", "dow", "s&p"],
            Theme::Bonds => &["bond", "treasury", "yield", "debt"],
            Theme::Commodities => &["oil", "gold", "commodity", "commodities", "metals"],
            Theme::Currencies => &["forex", "currency", "dollar", "euro", "yen"],
            Theme::Crypto => &["crypto", "bitcoin", "ethereum", "blockchain"],
            Theme::Economy => &["economy", "gdp", "inflation", "fed", "economic"],
            Theme::Banking => &["bank", "banking", "citi", "jpmorgan", "goldman"],
        }
    }

    pub fn matches(&self, lowered_title: &str) -> bool {
        self.keywords().iter().any(|kw| lowered_title.contains(kw))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Tags a title with every theme whose keywords appear in it.
///
/// Matching is a case-insensitive substring test, so "Goldman" also
/// tags Commodities through "gold". Results follow `Theme::ALL` order.
pub fn classify(title: &str) -> Vec<Theme> {
    let lowered = title.to_lowercase();
    Theme::ALL
        .into_iter()
        .filter(|theme| theme.matches(&lowered))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_has_no_themes() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_bitcoin_is_crypto() {
        assert_eq!(classify("Bitcoin climbs past record"), vec![Theme::Crypto]);
        assert!(classify("BITCOIN ETF approved").contains(&Theme::Crypto));
    }

    #[test]
    fn test_multiple_themes_in_declaration_order() {
        let themes = classify("Fed signals rate pause as stock market rallies");
        assert_eq!(themes, vec![Theme::Markets, Theme::Stocks, Theme::Economy]);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "goldman" contains "gold"
        let themes = classify("Goldman raises forecast");
        assert_eq!(themes, vec![Theme::Commodities, Theme::Banking]);
    }

    #[test]
    fn test_unrelated_title() {
        assert!(classify("Local bakery opens second location").is_empty());
    }

    #[test]
    fn test_theme_round_trips_through_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!("crypto".parse::<Theme>().is_err());
        assert!("All".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serializes_as_name() {
        let json = serde_json::to_string(&Theme::Commodities).unwrap();
        assert_eq!(json, "\"Commodities\"");
    }
}
