//! The recognised UTM query keys

use std::fmt;

/// One of the six standard UTM query keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtmParameter {
    /// `utm_source` - referrer (e.g. newsletter, google)
    Source,
    /// `utm_medium` - marketing medium (e.g. email, cpc)
    Medium,
    /// `utm_campaign` - campaign name
    Name,
    /// `utm_id` - campaign id
    Id,
    /// `utm_term` - paid search keywords
    Term,
    /// `utm_content` - distinguishes ads or links pointing to the same URL
    Content,
}

impl UtmParameter {
    /// All keys in serialization order
    pub const ALL: [UtmParameter; 6] = [
        UtmParameter::Source,
        UtmParameter::Medium,
        UtmParameter::Name,
        UtmParameter::Id,
        UtmParameter::Term,
        UtmParameter::Content,
    ];

    /// Query string key, e.g. `utm_source`
    pub fn key(&self) -> &'static str {
        match self {
            UtmParameter::Source => "utm_source",
            UtmParameter::Medium => "utm_medium",
            UtmParameter::Name => "utm_campaign",
            UtmParameter::Id => "utm_id",
            UtmParameter::Term => "utm_term",
            UtmParameter::Content => "utm_content",
        }
    }
}

impl fmt::Display for UtmParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}
