//! The ordered provider catalog and ring cycling.
//!
//! A [`ProviderRegistry`] is validated once when it is built. After that,
//! every lookup is infallible: unknown keys resolve to the first entry so a
//! stale or corrupt saved preference can never break dispatch.

use std::collections::HashSet;
use std::sync::OnceLock;

use url::Url;

use crate::error::SearchError;
use crate::types::{Direction, Provider};

/// Key of the first built-in provider.
pub const DEFAULT_PROVIDER_KEY: &str = "google";

/// Built-in catalog as `(key, name, query template, brand domain)`, in cycle order.
const BUILTIN_PROVIDERS: &[(&str, &str, &str, &str)] = &[
    ("google", "Google", "https://www.google.com/search?q=", "google.com"),
    ("duckduckgo", "DuckDuckGo", "https://duckduckgo.com/?q=", "duckduckgo.com"),
    ("brave", "Brave", "https://search.brave.com/search?q=", "brave.com"),
    ("bing", "Bing", "https://www.bing.com/search?q=", "bing.com"),
    (
        "wikipedia",
        "Wikipedia",
        "https://en.wikipedia.org/wiki/Special:Search?search=",
        "wikipedia.org",
    ),
    (
        "youtube",
        "YouTube",
        "https://www.youtube.com/results?search_query=",
        "youtube.com",
    ),
];

static BUILTIN: OnceLock<ProviderRegistry> = OnceLock::new();

/// Ordered, immutable provider catalog keyed by [`Provider::key`].
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    /// Build a registry, rejecting empty catalogs, duplicate keys, and
    /// templates that are not absolute `http(s)` URLs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Registry`] describing the first defect found.
    pub fn new(providers: Vec<Provider>) -> Result<Self, SearchError> {
        if providers.is_empty() {
            return Err(SearchError::Registry(
                "at least one provider must be registered".into(),
            ));
        }
        let mut seen = HashSet::new();
        for provider in &providers {
            if provider.key.trim().is_empty() {
                return Err(SearchError::Registry("provider key must not be empty".into()));
            }
            if !seen.insert(provider.key.as_str()) {
                return Err(SearchError::Registry(format!(
                    "duplicate provider key `{}`",
                    provider.key
                )));
            }
            validate_template(provider)?;
        }
        Ok(Self { providers })
    }

    /// The process-wide built-in catalog, constructed on first use.
    pub fn builtin() -> &'static ProviderRegistry {
        BUILTIN.get_or_init(|| Self {
            providers: BUILTIN_PROVIDERS
                .iter()
                .map(|(key, name, template, domain)| Provider::new(key, name, template, domain))
                .collect(),
        })
    }

    /// Look up a provider by key.
    pub fn get(&self, key: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.key == key)
    }

    /// Returns `true` if `key` names a registered provider.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The default provider (first in catalog order).
    pub fn first(&self) -> &Provider {
        // Non-empty by construction.
        &self.providers[0]
    }

    /// Look up `key`, falling back to [`ProviderRegistry::first`].
    pub fn resolve_key(&self, key: &str) -> &Provider {
        self.get(key).unwrap_or_else(|| self.first())
    }

    /// Providers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    /// Provider keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.key.as_str())
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the catalog has no providers. `false` for any registry built by
    /// [`ProviderRegistry::new`].
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Position of `key` in catalog order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.providers.iter().position(|p| p.key == key)
    }

    /// Step to the adjacent provider, wrapping at both ends.
    ///
    /// An unknown `current` key is treated as the first entry, so cycling
    /// forward from it yields the second provider and backward the last.
    pub fn cycle(&self, current: &str, direction: Direction) -> &Provider {
        let len = self.providers.len();
        let idx = self.position(current).unwrap_or(0);
        let next = match direction {
            Direction::Forward => (idx + 1) % len,
            Direction::Backward => (idx + len - 1) % len,
        };
        &self.providers[next]
    }
}

/// Icon address for a provider's brand domain.
pub fn favicon_url(provider: &Provider) -> String {
    format!(
        "https://www.google.com/s2/favicons?domain={}&sz=64",
        provider.domain
    )
}

fn validate_template(provider: &Provider) -> Result<(), SearchError> {
    let parsed = Url::parse(&provider.query_template).map_err(|e| {
        SearchError::Registry(format!(
            "provider `{}` has an invalid query template: {e}",
            provider.key
        ))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SearchError::Registry(format!(
            "provider `{}` query template must use http or https",
            provider.key
        )));
    }
    Ok(())
}
