//! Startpage: a personal browser start page.
//!
//! The search box is the part with real decision logic and lives in the
//! [`startpage_search`] crate. This crate wires it to the rest of the page:
//!
//! - **Storage**: a string key-value store, file-backed by default
//! - **Preferences**: the persisted active search provider
//! - **Search bar**: query editing, operator chips, submit and navigation
//! - **Shortcuts**: up to eight pinned sites with derived icons
//!
//! Rendering, the clock and weather widgets, and opening browser tabs are
//! left to the embedding UI.

pub mod config;
pub mod error;
pub mod preferences;
pub mod search_bar;
pub mod shortcuts;
pub mod startpage_dirs;
pub mod storage;

pub use config::StartPageConfig;
pub use error::{Result, StartPageError};
pub use preferences::ProviderPreference;
pub use search_bar::{Navigator, SearchBar, SubmitOutcome};
pub use shortcuts::{Shortcut, Shortcuts};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

pub use startpage_search;
