//! UTM-tagged URL: serialization and parsing

use crate::domain::{Address, Campaign, UtmParameter};
use crate::error::{Result, UtmError};
use std::fmt;
use std::str::FromStr;

/// A base address together with the campaign it is tagged with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Utm {
    pub url: Address,
    pub campaign: Campaign,
}

impl Utm {
    pub fn new(url: Address, campaign: Campaign) -> Self {
        Utm { url, campaign }
    }

    /// Parse a previously built UTM URL.
    ///
    /// The input is split at the first `?`: the left part must be a valid
    /// [`Address`], the right part is split on `&`. For each key the first
    /// token that *starts with* the key is used, so `utm_sourceX=1` is read
    /// as `utm_source`. A matching token without `=` is an error; an empty
    /// value (`utm_medium=`) leaves the attribute absent.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(UtmError::InvalidUrl(None));
        }

        let (base, query) = raw
            .split_once('?')
            .ok_or_else(|| UtmError::invalid_url("no query segment was provided"))?;

        let url = Address::new(base)?;
        let tokens: Vec<&str> = query.split('&').collect();

        let mut campaign = Campaign::default();
        for parameter in UtmParameter::ALL {
            let value = Self::extract(&tokens, parameter)?;
            campaign = campaign.with(parameter, value);
        }

        tracing::trace!(%url, ?campaign, "parsed utm url");

        Ok(Utm::new(url, campaign))
    }

    /// Value of the first token starting with the parameter's key
    fn extract(tokens: &[&str], parameter: UtmParameter) -> Result<Option<String>> {
        let Some(token) = tokens.iter().find(|t| t.starts_with(parameter.key())) else {
            return Ok(None);
        };

        match token.split_once('=') {
            Some((_, value)) => Ok(Some(value.to_string())),
            None => Err(UtmError::invalid_url(format!(
                "'{}' has no value",
                parameter.key()
            ))),
        }
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: Vec<String> = UtmParameter::ALL
            .iter()
            .filter_map(|parameter| {
                self.campaign
                    .get(*parameter)
                    .map(|value| format!("{}={}", parameter, value))
            })
            .collect();

        write!(f, "{}?{}", self.url, segments.join("&"))
    }
}

impl FromStr for Utm {
    type Err = UtmError;

    fn from_str(s: &str) -> Result<Self> {
        Utm::parse(s)
    }
}
