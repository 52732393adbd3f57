//! Error types for the start page.

use startpage_search::SearchError;

/// Top-level error type for the start page.
#[derive(Debug, thiserror::Error)]
pub enum StartPageError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Persisted key-value storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A provider key that is not in the catalog was selected.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// A shortcut with a blank name or URL, or a bad index.
    #[error("invalid shortcut: {0}")]
    InvalidShortcut(String),

    /// The pinned shortcut list is full.
    #[error("shortcut limit reached: at most {0} shortcuts can be pinned")]
    ShortcutLimit(usize),

    /// The caller-supplied navigator failed to open an address.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// Dispatch configuration error from the search core.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, StartPageError>;
