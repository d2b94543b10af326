//! Parse UTM URL use case

use crate::domain::{Utm, UtmParameter};
use crate::error::Result;

/// Service for recovering address and campaign from a UTM URL
pub struct ParseService;

impl ParseService {
    /// Parse `raw`, warning about query tokens that no UTM key matches
    pub fn parse(raw: &str) -> Result<Utm> {
        let utm = Utm::parse(raw)?;

        for token in Self::ignored_tokens(raw) {
            tracing::warn!("ignoring query parameter '{}'", token);
        }

        Ok(utm)
    }

    /// Non-empty query tokens that do not start with any UTM key
    pub fn ignored_tokens(raw: &str) -> Vec<&str> {
        let Some((_, query)) = raw.split_once('?') else {
            return Vec::new();
        };

        query
            .split('&')
            .filter(|token| !token.is_empty())
            .filter(|token| {
                !UtmParameter::ALL
                    .iter()
                    .any(|parameter| token.starts_with(parameter.key()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UtmError;

    #[test]
    fn test_parse_returns_campaign() {
        let utm = ParseService::parse("https://x.io/?utm_source=a&ref=b").unwrap();
        assert_eq!(utm.campaign.source(), Some("a"));
    }

    #[test]
    fn test_parse_propagates_errors() {
        assert!(matches!(
            ParseService::parse("https://x.io/"),
            Err(UtmError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_ignored_tokens() {
        let raw = "https://x.io/?ref=home&utm_source=a&&page=2&utm_sourceX=1";
        assert_eq!(ParseService::ignored_tokens(raw), vec!["ref=home", "page=2"]);
    }

    #[test]
    fn test_ignored_tokens_without_query() {
        assert!(ParseService::ignored_tokens("https://x.io/").is_empty());
    }
}
