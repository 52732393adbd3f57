//! End-to-end start page flow against file-backed storage.
//!
//! Each test works in its own temp directory so state never leaks between
//! runs: config on disk, a JSON key-value store, and a recording navigator
//! standing in for the browser.

use startpage::startpage_search::{Direction, ProviderRegistry};
use startpage::storage::PROVIDER_KEY;
use startpage::{
    JsonFileStore, KeyValueStore, Navigator, SearchBar, Shortcuts, StartPageConfig,
    StartPageError, SubmitOutcome,
};

#[derive(Default)]
struct Tabs(Vec<String>);

impl Navigator for Tabs {
    fn open(&mut self, address: &str) -> startpage::Result<()> {
        self.0.push(address.to_owned());
        Ok(())
    }
}

#[test]
fn provider_choice_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("storage.json");
    let config = StartPageConfig::default();

    {
        let mut store = JsonFileStore::open(&store_path).expect("open store");
        let mut bar = SearchBar::from_config(&store, ProviderRegistry::builtin(), &config)
            .expect("search bar");
        bar.cycle_provider(&mut store, Direction::Forward)
            .expect("cycle");
        bar.cycle_provider(&mut store, Direction::Forward)
            .expect("cycle");
        assert_eq!(bar.provider().key, "brave");
    }

    let store = JsonFileStore::open(&store_path).expect("reopen store");
    let mut bar =
        SearchBar::from_config(&store, ProviderRegistry::builtin(), &config).expect("search bar");
    assert_eq!(bar.provider().key, "brave");

    let mut tabs = Tabs::default();
    bar.set_query("wasm bindgen");
    bar.submit(&mut tabs).expect("submit");
    assert_eq!(
        tabs.0,
        vec!["https://search.brave.com/search?q=wasm%20bindgen".to_string()]
    );
}

#[test]
fn stale_saved_provider_is_discarded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("storage.json");
    std::fs::write(&store_path, r#"{"searchEngineKey":"yahoo"}"#).expect("seed store");

    let mut config = StartPageConfig::default();
    config.search.default_provider = "duckduckgo".into();

    let store = JsonFileStore::open(&store_path).expect("open store");
    let bar = SearchBar::from_config(&store, ProviderRegistry::builtin(), &config)
        .expect("search bar");
    assert_eq!(bar.provider().key, "duckduckgo");
    assert_eq!(store.get(PROVIDER_KEY).expect("read").as_deref(), Some("yahoo"));
}

#[test]
fn config_file_drives_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[search]
default_provider = "wikipedia"

[search.services]
social_profile = "https://bsky.app/profile/{}"

[shortcuts]
max_pinned = 1
"#,
    )
    .expect("write config");

    let config = StartPageConfig::load_or_default(&config_path).expect("load config");
    config.validate().expect("valid config");

    let mut store = JsonFileStore::open(dir.path().join("storage.json")).expect("open store");
    let mut bar =
        SearchBar::from_config(&store, ProviderRegistry::builtin(), &config).expect("search bar");
    let mut tabs = Tabs::default();

    bar.set_query("@rustlang");
    let outcome = bar.submit(&mut tabs).expect("submit");
    assert_eq!(
        outcome,
        SubmitOutcome::Opened(vec![
            "https://github.com/rustlang".to_string(),
            "https://bsky.app/profile/rustlang".to_string(),
        ])
    );

    let mut shortcuts =
        Shortcuts::load(&store, config.shortcuts.max_pinned).expect("load shortcuts");
    shortcuts
        .add(&mut store, "Rust", "rust-lang.org")
        .expect("first shortcut");
    let err = shortcuts
        .add(&mut store, "Crates", "crates.io")
        .expect_err("limit");
    assert!(matches!(err, StartPageError::ShortcutLimit(1)));
}

#[test]
fn end_to_end_scenarios() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::open(dir.path().join("storage.json")).expect("open store");
    let mut bar = SearchBar::from_config(
        &store,
        ProviderRegistry::builtin(),
        &StartPageConfig::default(),
    )
    .expect("search bar");

    let mut tabs = Tabs::default();
    bar.set_query("  ");
    assert_eq!(bar.submit(&mut tabs).expect("submit"), SubmitOutcome::Rejected);
    assert!(tabs.0.is_empty());

    bar.set_query("github.com/foo");
    bar.submit(&mut tabs).expect("submit");
    assert_eq!(tabs.0, vec!["https://github.com/foo".to_string()]);

    tabs.0.clear();
    bar.set_query("jane@co.io");
    bar.submit(&mut tabs).expect("submit");
    assert_eq!(tabs.0.len(), 2);
    assert!(tabs.0.iter().all(|url| url.contains("jane%40co.io")));
    assert!(tabs.0[0].contains("dehashed.com"));
}
