//! Error types for the startpage-search crate.
//!
//! Dispatch itself never fails: empty input is a rejection, and unknown
//! provider keys fall back to the catalog default. The only errors are
//! configuration defects caught when a registry or service table is built.

/// Errors raised while building the dispatch configuration.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The provider catalog is malformed (empty, duplicate keys, bad template).
    #[error("registry error: {0}")]
    Registry(String),

    /// Invalid dispatch configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for startpage-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_registry() {
        let err = SearchError::Registry("duplicate provider key `google`".into());
        assert_eq!(
            err.to_string(),
            "registry error: duplicate provider key `google`"
        );
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("template has no placeholder".into());
        assert_eq!(err.to_string(), "config error: template has no placeholder");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
