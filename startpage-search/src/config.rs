//! Dispatch configuration passed explicitly into every resolve call.
//!
//! [`DispatchConfig`] carries the active provider key and the lookup
//! service templates used by fan-out intents. Nothing here is global; the
//! caller owns the value and hands it in.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::registry::DEFAULT_PROVIDER_KEY;

/// Placeholder replaced by the lookup subject in every service template.
pub const PLACEHOLDER: &str = "{}";

/// Raw templates for the structured lookups that fan out to several services.
///
/// This is the editable, serialisable form. Turn it into [`LookupServices`]
/// with [`LookupServices::new`] before it can be used for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTemplates {
    /// Vulnerability database entry for a CVE id (opened first).
    pub vulnerability_db: String,
    /// Exploit database search for a CVE id.
    pub exploit_db: String,
    /// Breach/leak search for a percent-encoded e-mail address (opened first).
    pub breach_search: String,
    /// Code-hosting search for a percent-encoded, quoted e-mail address.
    pub code_search: String,
    /// Code-hosting profile for a bare handle (opened first).
    pub code_profile: String,
    /// Social profile for a bare handle.
    pub social_profile: String,
}

impl Default for ServiceTemplates {
    fn default() -> Self {
        Self {
            vulnerability_db: "https://nvd.nist.gov/vuln/detail/{}".to_owned(),
            exploit_db: "https://www.exploit-db.com/search?cve={}".to_owned(),
            breach_search: "https://www.dehashed.com/search?query={}".to_owned(),
            code_search: "https://github.com/search?q={}".to_owned(),
            code_profile: "https://github.com/{}".to_owned(),
            social_profile: "https://twitter.com/{}".to_owned(),
        }
    }
}

impl ServiceTemplates {
    /// Validates every template.
    ///
    /// Checks:
    /// - each template starts with `http://` or `https://`
    /// - each template contains exactly one `{}` placeholder
    pub fn validate(&self) -> Result<(), SearchError> {
        for (name, template) in self.named_templates() {
            if !(template.starts_with("https://") || template.starts_with("http://")) {
                return Err(SearchError::Config(format!(
                    "{name} template must start with http:// or https://"
                )));
            }
            if template.matches(PLACEHOLDER).count() != 1 {
                return Err(SearchError::Config(format!(
                    "{name} template must contain exactly one {PLACEHOLDER} placeholder"
                )));
            }
        }
        Ok(())
    }

    fn named_templates(&self) -> [(&'static str, &str); 6] {
        [
            ("vulnerability_db", self.vulnerability_db.as_str()),
            ("exploit_db", self.exploit_db.as_str()),
            ("breach_search", self.breach_search.as_str()),
            ("code_search", self.code_search.as_str()),
            ("code_profile", self.code_profile.as_str()),
            ("social_profile", self.social_profile.as_str()),
        ]
    }
}

/// Validated lookup service templates.
///
/// Every value of this type has passed [`ServiceTemplates::validate`]:
/// [`LookupServices::new`] checks on construction, and deserialisation goes
/// through the same check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ServiceTemplates", into = "ServiceTemplates")]
pub struct LookupServices {
    templates: ServiceTemplates,
}

impl LookupServices {
    /// Validate `templates` and wrap them.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] naming the first malformed template.
    pub fn new(templates: ServiceTemplates) -> Result<Self, SearchError> {
        templates.validate()?;
        Ok(Self { templates })
    }

    /// The validated templates.
    pub fn templates(&self) -> &ServiceTemplates {
        &self.templates
    }
}

impl TryFrom<ServiceTemplates> for LookupServices {
    type Error = SearchError;

    fn try_from(templates: ServiceTemplates) -> Result<Self, Self::Error> {
        Self::new(templates)
    }
}

impl From<LookupServices> for ServiceTemplates {
    fn from(services: LookupServices) -> Self {
        services.templates
    }
}

/// Substitute `subject` into a validated template.
pub(crate) fn fill(template: &str, subject: &str) -> String {
    template.replacen(PLACEHOLDER, subject, 1)
}

/// Per-call dispatch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Key of the provider used for keyword queries.
    pub active_provider: String,
    /// Templates for CVE, e-mail, and handle lookups.
    pub services: LookupServices,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            active_provider: DEFAULT_PROVIDER_KEY.to_owned(),
            services: LookupServices::default(),
        }
    }
}

impl DispatchConfig {
    /// Config using the default services and the given active provider.
    pub fn with_provider(key: impl Into<String>) -> Self {
        Self {
            active_provider: key.into(),
            ..Default::default()
        }
    }
}
