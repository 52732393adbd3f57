//! Where the start page keeps its two files on disk.
//!
//! - `config.toml` (see [`config_file`]): search, shortcut and storage
//!   settings, read once at startup. Lives in the platform config directory.
//! - `storage.json` (see [`storage_file`]): the key-value store holding the
//!   selected provider and pinned shortcuts, rewritten on every change.
//!   Lives in the platform data directory.
//!
//! Both directories end in `startpage`. `STARTPAGE_CONFIG_DIR` and
//! `STARTPAGE_DATA_DIR` replace them outright.

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "startpage";

/// Directory holding `storage.json`.
#[must_use]
pub fn data_dir() -> PathBuf {
    pick(
        std::env::var_os("STARTPAGE_DATA_DIR"),
        dirs::data_dir(),
        "/tmp/startpage-data",
    )
}

/// Directory holding `config.toml`.
#[must_use]
pub fn config_dir() -> PathBuf {
    pick(
        std::env::var_os("STARTPAGE_CONFIG_DIR"),
        dirs::config_dir(),
        "/tmp/startpage-config",
    )
}

/// The settings file read by [`crate::StartPageConfig::load_or_default`].
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// The default [`crate::JsonFileStore`] location.
#[must_use]
pub fn storage_file() -> PathBuf {
    data_dir().join("storage.json")
}

/// An explicit override wins; otherwise `<platform base>/startpage`, or
/// `fallback` on platforms without one.
fn pick(override_dir: Option<OsString>, base: Option<PathBuf>, fallback: &str) -> PathBuf {
    match (override_dir, base) {
        (Some(dir), _) => PathBuf::from(dir),
        (None, Some(base)) => base.join(APP_DIR),
        (None, None) => PathBuf::from(fallback),
    }
}
