//! Campaign attribute set

use crate::domain::UtmParameter;
use serde::Serialize;

/// The six optional UTM attributes describing one campaign.
///
/// An attribute is either absent or non-empty: empty strings are stored as
/// absent, so a campaign always survives a serialize/parse round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Campaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl Campaign {
    /// Create a campaign from six attributes; empty ones are absent
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        term: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Campaign {
            source: present(source.into()),
            medium: present(medium.into()),
            name: present(name.into()),
            id: present(id.into()),
            term: present(term.into()),
            content: present(content.into()),
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Read one attribute
    pub fn get(&self, parameter: UtmParameter) -> Option<&str> {
        match parameter {
            UtmParameter::Source => self.source(),
            UtmParameter::Medium => self.medium(),
            UtmParameter::Name => self.name(),
            UtmParameter::Id => self.id(),
            UtmParameter::Term => self.term(),
            UtmParameter::Content => self.content(),
        }
    }

    /// Return a copy with one attribute replaced; `None` or `""` clears it
    pub fn with(mut self, parameter: UtmParameter, value: Option<String>) -> Self {
        let slot = match parameter {
            UtmParameter::Source => &mut self.source,
            UtmParameter::Medium => &mut self.medium,
            UtmParameter::Name => &mut self.name,
            UtmParameter::Id => &mut self.id,
            UtmParameter::Term => &mut self.term,
            UtmParameter::Content => &mut self.content,
        };
        *slot = value.and_then(present);
        self
    }

    /// True when no attribute is present
    pub fn is_empty(&self) -> bool {
        UtmParameter::ALL.iter().all(|p| self.get(*p).is_none())
    }
}

fn present(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
