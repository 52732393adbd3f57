//! Core types for providers, classified intents, and dispatch results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configured keyword-search destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Unique identifier, also the value persisted as the active selection.
    pub key: String,
    /// Human-readable name shown in the search bar.
    pub name: String,
    /// URL prefix to which the percent-encoded query is appended.
    pub query_template: String,
    /// Brand domain, used only to derive the provider icon.
    pub domain: String,
}

impl Provider {
    /// Build a provider from borrowed parts.
    pub fn new(key: &str, name: &str, query_template: &str, domain: &str) -> Self {
        Self {
            key: key.to_owned(),
            name: name.to_owned(),
            query_template: query_template.to_owned(),
            domain: domain.to_owned(),
        }
    }

    /// Build the search address for an already-trimmed query.
    pub fn query_url(&self, text: &str) -> String {
        format!("{}{}", self.query_template, urlencoding::encode(text))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The classified meaning of a raw search-box input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Input is already a navigable address (normalized).
    Url { address: String },
    /// A CVE identifier, uppercased.
    VulnerabilityId { id: String },
    /// An e-mail address to look up.
    EmailLookup { address: String },
    /// A social handle with the leading `@` stripped.
    HandleLookup { handle: String },
    /// Free text for the active provider.
    KeywordQuery { text: String, provider_key: String },
}

impl Intent {
    /// Short label for logging, never includes the query itself.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url { .. } => "url",
            Self::VulnerabilityId { .. } => "cve",
            Self::EmailLookup { .. } => "email",
            Self::HandleLookup { .. } => "handle",
            Self::KeywordQuery { .. } => "search",
        }
    }
}

/// One or more destination addresses, in the order they should be opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dispatch {
    /// A single destination.
    Single(String),
    /// A fan-out to several services; never empty, first entry is primary.
    Multiple(Vec<String>),
}

impl Dispatch {
    /// All addresses in open order.
    pub fn addresses(&self) -> &[String] {
        match self {
            Self::Single(address) => std::slice::from_ref(address),
            Self::Multiple(addresses) => addresses,
        }
    }

    /// The address opened first.
    pub fn primary(&self) -> Option<&str> {
        self.addresses().first().map(String::as_str)
    }

    /// Consume into an owned address list.
    pub fn into_addresses(self) -> Vec<String> {
        match self {
            Self::Single(address) => vec![address],
            Self::Multiple(addresses) => addresses,
        }
    }
}

/// Outcome of resolving raw input: something to open, or nothing to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Open these destinations.
    Dispatch(Dispatch),
    /// Blank input. Callers surface this as a non-fatal cue.
    Rejected,
}

impl Resolution {
    /// Returns `true` for [`Resolution::Rejected`].
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Direction for ring cycling through the provider catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Next entry in catalog order (Ctrl+Down).
    Forward,
    /// Previous entry in catalog order (Ctrl+Up).
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_query_url_encodes_text() {
        let provider = Provider::new("ddg", "DuckDuckGo", "https://duckduckgo.com/?q=", "duckduckgo.com");
        assert_eq!(
            provider.query_url("rust & c++"),
            "https://duckduckgo.com/?q=rust%20%26%20c%2B%2B"
        );
    }

    #[test]
    fn provider_display_is_name() {
        let provider = Provider::new("bing", "Bing", "https://www.bing.com/search?q=", "bing.com");
        assert_eq!(provider.to_string(), "Bing");
    }

    #[test]
    fn single_dispatch_addresses() {
        let dispatch = Dispatch::Single("https://example.com".into());
        assert_eq!(dispatch.addresses(), ["https://example.com".to_string()]);
        assert_eq!(dispatch.primary(), Some("https://example.com"));
    }

    #[test]
    fn multiple_dispatch_preserves_order() {
        let dispatch = Dispatch::Multiple(vec!["https://a.test".into(), "https://b.test".into()]);
        assert_eq!(dispatch.primary(), Some("https://a.test"));
        assert_eq!(
            dispatch.into_addresses(),
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
    }

    #[test]
    fn intent_kind_labels() {
        let intent = Intent::HandleLookup {
            handle: "octocat".into(),
        };
        assert_eq!(intent.kind(), "handle");
        let intent = Intent::KeywordQuery {
            text: "x".into(),
            provider_key: "google".into(),
        };
        assert_eq!(intent.kind(), "search");
    }

    #[test]
    fn intent_serializes_with_type_tag() {
        let intent = Intent::VulnerabilityId {
            id: "CVE-2021-34527".into(),
        };
        let json = serde_json::to_string(&intent).expect("serialize");
        assert_eq!(json, r#"{"type":"vulnerability_id","id":"CVE-2021-34527"}"#);
    }

    #[test]
    fn direction_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Backward).expect("serialize");
        assert_eq!(json, r#""backward""#);
    }

    #[test]
    fn rejected_is_rejected() {
        assert!(Resolution::Rejected.is_rejected());
        assert!(!Resolution::Dispatch(Dispatch::Single("https://x.com".into())).is_rejected());
    }
}
