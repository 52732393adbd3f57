//! The persisted active search provider.
//!
//! The selection always names a provider in the registry. A saved key that
//! no longer exists is discarded on load, and every change is written back
//! to storage before the call returns.

use startpage_search::{Direction, DispatchConfig, LookupServices, Provider, ProviderRegistry};

use crate::error::{Result, StartPageError};
use crate::storage::{KeyValueStore, PROVIDER_KEY};

/// The active provider selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPreference {
    active: String,
}

impl ProviderPreference {
    /// Read the saved selection from `store`.
    ///
    /// Falls back to `default_key` when nothing is saved or the saved key is
    /// not in `registry`, and to the registry's first entry when
    /// `default_key` is unknown too.
    ///
    /// # Errors
    ///
    /// Only storage read failures are returned; bad values are never errors.
    pub fn load<S: KeyValueStore + ?Sized>(
        store: &S,
        registry: &ProviderRegistry,
        default_key: &str,
    ) -> Result<Self> {
        let fallback = registry.resolve_key(default_key).key.clone();
        let active = match store.get(PROVIDER_KEY)? {
            Some(saved) if registry.contains(&saved) => saved,
            Some(saved) => {
                tracing::warn!(saved = %saved, fallback = %fallback, "discarding unknown saved provider");
                fallback
            }
            None => fallback,
        };
        Ok(Self { active })
    }

    /// Key of the active provider.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// The active provider's catalog entry.
    pub fn provider<'r>(&self, registry: &'r ProviderRegistry) -> &'r Provider {
        registry.resolve_key(&self.active)
    }

    /// Select `key` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::UnknownProvider`] if `key` is not in
    /// `registry`; the selection is left unchanged.
    pub fn select<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        registry: &ProviderRegistry,
        key: &str,
    ) -> Result<()> {
        if !registry.contains(key) {
            return Err(StartPageError::UnknownProvider(key.to_owned()));
        }
        self.set(store, key)
    }

    /// Move to the adjacent provider and persist it. Returns the new key.
    ///
    /// # Errors
    ///
    /// Returns an error only if the new selection cannot be stored.
    pub fn cycle<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        registry: &ProviderRegistry,
        direction: Direction,
    ) -> Result<&str> {
        let next = registry.cycle(&self.active, direction).key.clone();
        self.set(store, &next)?;
        Ok(&self.active)
    }

    /// Build the per-call dispatch configuration for the current selection.
    pub fn dispatch_config(&self, services: &LookupServices) -> DispatchConfig {
        DispatchConfig {
            active_provider: self.active.clone(),
            services: services.clone(),
        }
    }

    fn set<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, key: &str) -> Result<()> {
        store.set(PROVIDER_KEY, key)?;
        tracing::debug!(provider = %key, "active provider changed");
        self.active = key.to_owned();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::storage::MemoryStore;

    fn registry() -> &'static ProviderRegistry {
        ProviderRegistry::builtin()
    }

    #[test]
    fn load_without_saved_value_uses_default() {
        let store = MemoryStore::new();
        let pref = ProviderPreference::load(&store, registry(), "brave").unwrap();
        assert_eq!(pref.active(), "brave");
    }

    #[test]
    fn load_restores_saved_value() {
        let mut store = MemoryStore::new();
        store.set(PROVIDER_KEY, "youtube").unwrap();
        let pref = ProviderPreference::load(&store, registry(), "google").unwrap();
        assert_eq!(pref.active(), "youtube");
        assert_eq!(pref.provider(registry()).name, "YouTube");
    }

    #[test]
    fn load_discards_unknown_saved_value() {
        let mut store = MemoryStore::new();
        store.set(PROVIDER_KEY, "altavista").unwrap();
        let pref = ProviderPreference::load(&store, registry(), "bing").unwrap();
        assert_eq!(pref.active(), "bing");
    }

    #[test]
    fn load_with_unknown_default_uses_first() {
        let store = MemoryStore::new();
        let pref = ProviderPreference::load(&store, registry(), "lycos").unwrap();
        assert_eq!(pref.active(), "google");
    }

    #[test]
    fn select_persists() {
        let mut store = MemoryStore::new();
        let mut pref = ProviderPreference::load(&store, registry(), "google").unwrap();
        pref.select(&mut store, registry(), "wikipedia").unwrap();
        assert_eq!(pref.active(), "wikipedia");
        assert_eq!(store.get(PROVIDER_KEY).unwrap().as_deref(), Some("wikipedia"));
    }

    #[test]
    fn select_unknown_is_rejected_and_unchanged() {
        let mut store = MemoryStore::new();
        let mut pref = ProviderPreference::load(&store, registry(), "google").unwrap();
        let err = pref.select(&mut store, registry(), "nope").unwrap_err();
        assert!(matches!(err, StartPageError::UnknownProvider(ref k) if k == "nope"));
        assert_eq!(pref.active(), "google");
        assert_eq!(store.get(PROVIDER_KEY).unwrap(), None);
    }

    #[test]
    fn cycle_persists_each_step() {
        let mut store = MemoryStore::new();
        let mut pref = ProviderPreference::load(&store, registry(), "google").unwrap();
        assert_eq!(pref.cycle(&mut store, registry(), Direction::Backward).unwrap(), "youtube");
        assert_eq!(store.get(PROVIDER_KEY).unwrap().as_deref(), Some("youtube"));
        assert_eq!(pref.cycle(&mut store, registry(), Direction::Forward).unwrap(), "google");
        assert_eq!(store.get(PROVIDER_KEY).unwrap().as_deref(), Some("google"));
    }

    #[test]
    fn dispatch_config_carries_selection() {
        let store = MemoryStore::new();
        let pref = ProviderPreference::load(&store, registry(), "duckduckgo").unwrap();
        let config = pref.dispatch_config(&LookupServices::default());
        assert_eq!(config.active_provider, "duckduckgo");
    }
}
