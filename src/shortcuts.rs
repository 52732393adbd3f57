//! Pinned shortcuts shown in the sidebar.
//!
//! Shortcuts are persisted as a JSON array under [`SHORTCUTS_KEY`] and
//! rewritten on every change. URLs are normalised on save and each entry
//! gets a best-effort `/favicon.ico` icon derived from its origin.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use startpage_search::is_local_address;
use url::Url;

use crate::error::{Result, StartPageError};
use crate::storage::{KeyValueStore, SHORTCUTS_KEY};

/// Any `scheme://` prefix. Shortcuts accept arbitrary schemes, unlike the search box.
static ANY_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+://").expect("valid scheme regex"));

/// A pinned shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Label shown when the icon is missing.
    pub name: String,
    /// Normalised target address.
    pub url: String,
    /// Icon address, if one could be derived.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Shortcut {
    /// Build a shortcut from user input, normalising the URL and deriving the icon.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::InvalidShortcut`] if `name` or `url` is blank.
    pub fn new(name: &str, url: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StartPageError::InvalidShortcut("name must not be blank".into()));
        }
        if url.trim().is_empty() {
            return Err(StartPageError::InvalidShortcut("url must not be blank".into()));
        }
        let url = normalize_shortcut_url(url);
        let icon = favicon_for(&url);
        Ok(Self {
            name: name.to_owned(),
            url,
            icon,
        })
    }
}

/// Normalise a shortcut target: keep any `scheme://`, use `http://` for
/// localhost and IPv4 addresses, `https://` otherwise.
pub fn normalize_shortcut_url(input: &str) -> String {
    let value = input.trim();
    if ANY_SCHEME.is_match(value) {
        value.to_owned()
    } else if is_local_address(value) {
        format!("http://{value}")
    } else {
        format!("https://{value}")
    }
}

/// `<origin>/favicon.ico` for `url`, or `None` if it has no usable origin.
pub fn favicon_for(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return None;
    }
    Some(format!("{}/favicon.ico", origin.ascii_serialization()))
}

/// The ordered list of pinned shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcuts {
    items: Vec<Shortcut>,
    max_pinned: usize,
}

impl Shortcuts {
    /// Load the saved list. Unreadable JSON is treated as an empty list.
    ///
    /// # Errors
    ///
    /// Only storage read failures are returned.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, max_pinned: usize) -> Result<Self> {
        let items = match store.get(SHORTCUTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unreadable pinned shortcuts");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self { items, max_pinned })
    }

    /// Shortcuts in display order.
    pub fn list(&self) -> &[Shortcut] {
        &self.items
    }

    /// Whether another shortcut can be added.
    pub fn can_add(&self) -> bool {
        self.items.len() < self.max_pinned
    }

    /// Append a shortcut and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::ShortcutLimit`] when the list is full, or
    /// [`StartPageError::InvalidShortcut`] for blank input.
    pub fn add<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
        url: &str,
    ) -> Result<&Shortcut> {
        if !self.can_add() {
            return Err(StartPageError::ShortcutLimit(self.max_pinned));
        }
        let shortcut = Shortcut::new(name, url)?;
        let mut items = self.items.clone();
        items.push(shortcut);
        self.commit(store, items)?;
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Replace the shortcut at `index` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::InvalidShortcut`] for an out-of-range index
    /// or blank input.
    pub fn update<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        index: usize,
        name: &str,
        url: &str,
    ) -> Result<&Shortcut> {
        let shortcut = Shortcut::new(name, url)?;
        let mut items = self.items.clone();
        let slot = items
            .get_mut(index)
            .ok_or_else(|| StartPageError::InvalidShortcut(format!("no shortcut at index {index}")))?;
        *slot = shortcut;
        self.commit(store, items)?;
        Ok(&self.items[index])
    }

    /// Remove the shortcut at `index` and persist. Returns the removed entry.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::InvalidShortcut`] for an out-of-range index.
    pub fn remove<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        index: usize,
    ) -> Result<Shortcut> {
        if index >= self.items.len() {
            return Err(StartPageError::InvalidShortcut(format!(
                "no shortcut at index {index}"
            )));
        }
        let mut items = self.items.clone();
        let removed = items.remove(index);
        self.commit(store, items)?;
        Ok(removed)
    }

    /// Persist `items`, then adopt them. On a failed write the list is unchanged.
    fn commit<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        items: Vec<Shortcut>,
    ) -> Result<()> {
        let json =
            serde_json::to_string(&items).map_err(|e| StartPageError::Storage(e.to_string()))?;
        store.set(SHORTCUTS_KEY, &json)?;
        self.items = items;
        Ok(())
    }
}
