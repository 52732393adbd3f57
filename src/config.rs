//! Configuration for the start page.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use startpage_search::{LookupServices, ProviderRegistry, ServiceTemplates, DEFAULT_PROVIDER_KEY};

use crate::error::{Result, StartPageError};

/// Default number of pinned shortcuts the sidebar holds.
pub const DEFAULT_MAX_PINNED: usize = 8;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPageConfig {
    /// Search box settings.
    pub search: SearchConfig,
    /// Pinned shortcut settings.
    pub shortcuts: ShortcutsConfig,
    /// Persisted key-value storage settings.
    pub storage: StorageConfig,
}

/// Search box configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider used when nothing valid has been saved yet.
    pub default_provider: String,
    /// Lookup service templates for CVE, e-mail, and handle searches.
    /// Malformed templates are rejected when the file is parsed.
    pub services: LookupServices,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_provider: DEFAULT_PROVIDER_KEY.to_owned(),
            services: LookupServices::default(),
        }
    }
}

impl SearchConfig {
    /// Replace the lookup service templates after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::Search`] if a template is malformed; the
    /// current services are kept.
    pub fn set_services(&mut self, templates: ServiceTemplates) -> Result<()> {
        self.services = LookupServices::new(templates)?;
        Ok(())
    }
}

/// Pinned shortcut configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutsConfig {
    /// Maximum number of pinned shortcuts.
    pub max_pinned: usize,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            max_pinned: DEFAULT_MAX_PINNED,
        }
    }
}

/// Key-value storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file (None = `storage.json` in the data directory).
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured storage file, or the platform default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(crate::startpage_dirs::storage_file)
    }
}

impl StartPageConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StartPageError::Config(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| StartPageError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> PathBuf {
        crate::startpage_dirs::config_file()
    }

    /// Validates this configuration against the built-in provider catalog.
    ///
    /// Checks:
    /// - `search.default_provider` names a built-in provider
    /// - `shortcuts.max_pinned` is greater than 0
    pub fn validate(&self) -> Result<()> {
        if !ProviderRegistry::builtin().contains(&self.search.default_provider) {
            return Err(StartPageError::Config(format!(
                "search.default_provider `{}` is not a known provider",
                self.search.default_provider
            )));
        }
        if self.shortcuts.max_pinned == 0 {
            return Err(StartPageError::Config(
                "shortcuts.max_pinned must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StartPageConfig::default();
        assert_eq!(config.search.default_provider, "google");
        assert_eq!(config.shortcuts.max_pinned, 8);
        assert!(config.storage.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = StartPageConfig::default();
        config.search.default_provider = "brave".into();
        config.shortcuts.max_pinned = 4;
        config.storage.path = Some(dir.path().join("store.json"));

        config.save_to_file(&path).unwrap();
        let loaded = StartPageConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = StartPageConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(StartPageError::Io(_))));
    }

    #[test]
    fn load_or_default_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = StartPageConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StartPageConfig::default());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\ndefault_provider = ").unwrap();
        let result = StartPageConfig::from_file(&path);
        assert!(matches!(result, Err(StartPageError::Config(_))));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
default_provider = "wikipedia"
"#;
        let config: StartPageConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.default_provider, "wikipedia");
        assert_eq!(config.search.services, LookupServices::default());
        assert_eq!(config.shortcuts.max_pinned, DEFAULT_MAX_PINNED);
    }

    #[test]
    fn services_override_from_toml() {
        let toml_str = r#"
[search.services]
social_profile = "https://bsky.app/profile/{}"
"#;
        let config: StartPageConfig = toml::from_str(toml_str).unwrap();
        let templates = config.search.services.templates();
        assert_eq!(templates.social_profile, "https://bsky.app/profile/{}");
        assert_eq!(
            templates.code_profile,
            LookupServices::default().templates().code_profile
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_default_provider_rejected() {
        let mut config = StartPageConfig::default();
        config.search.default_provider = "altavista".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("altavista"));
    }

    #[test]
    fn bad_service_template_rejected_on_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search.services]\nexploit_db = \"https://www.exploit-db.com/\"\n",
        )
        .unwrap();
        let err = StartPageConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StartPageError::Config(_)));
        assert!(err.to_string().contains("exploit_db"));
    }

    #[test]
    fn set_services_validates() {
        let mut config = StartPageConfig::default();
        let bad = ServiceTemplates {
            code_search: "https://github.com/search".into(),
            ..Default::default()
        };
        let err = config.search.set_services(bad).unwrap_err();
        assert!(matches!(err, StartPageError::Search(_)));
        assert_eq!(config.search.services, LookupServices::default());

        let good = ServiceTemplates {
            social_profile: "https://bsky.app/profile/{}".into(),
            ..Default::default()
        };
        config.search.set_services(good).unwrap();
        assert_eq!(
            config.search.services.templates().social_profile,
            "https://bsky.app/profile/{}"
        );
    }

    #[test]
    fn zero_max_pinned_rejected() {
        let mut config = StartPageConfig::default();
        config.shortcuts.max_pinned = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_pinned"));
    }

    #[test]
    fn storage_path_override() {
        let config = StorageConfig {
            path: Some(PathBuf::from("/srv/startpage/kv.json")),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/srv/startpage/kv.json"));
    }
}
