//! # startpage-search
//!
//! Search-input interpretation and dispatch for the start page.
//!
//! Given whatever the user typed into the search box, this crate decides
//! where it should go: a pasted address is opened directly, a CVE id fans
//! out to vulnerability databases, an e-mail or `@handle` fans out to lookup
//! services, and anything else becomes a keyword search on the selected
//! provider.
//!
//! ## Design
//!
//! - Classification and resolution are pure, synchronous functions
//! - The provider catalog is immutable and validated when it is built
//! - Per-call state (the active provider) travels in an explicit [`DispatchConfig`]
//! - Lookup service templates are validated when [`LookupServices`] is built
//! - Unknown provider keys fall back to the catalog default instead of failing
//!
//! ## Privacy
//!
//! - Nothing is fetched; the crate only builds addresses
//! - Raw queries are logged only at trace level

pub mod config;
pub mod dispatch;
pub mod error;
pub mod operators;
pub mod registry;
pub mod types;

pub use config::{DispatchConfig, LookupServices, ServiceTemplates};
pub use dispatch::classify::classify;
pub use dispatch::resolve::resolve;
pub use dispatch::url_normalize::{is_likely_url, is_local_address, normalize};
pub use error::{Result, SearchError};
pub use registry::{favicon_url, ProviderRegistry, DEFAULT_PROVIDER_KEY};
pub use types::{Direction, Dispatch, Intent, Provider, Resolution};

/// Resolve raw search-box input against the built-in provider catalog.
///
/// # Examples
///
/// ```
/// use startpage_search::{DispatchConfig, Resolution};
///
/// let config = DispatchConfig::default();
/// let Resolution::Dispatch(dispatch) = startpage_search::search("jane@co.io", &config) else {
///     panic!("e-mail input should dispatch");
/// };
/// assert_eq!(dispatch.addresses().len(), 2);
/// assert!(startpage_search::search("   ", &config).is_rejected());
/// ```
pub fn search(raw: &str, config: &DispatchConfig) -> Resolution {
    dispatch::dispatch(raw, ProviderRegistry::builtin(), config)
}

/// Step the active provider through the built-in catalog.
///
/// Returns the key of the adjacent provider, wrapping at both ends.
pub fn cycle_provider(current: &str, direction: Direction) -> &'static str {
    ProviderRegistry::builtin().cycle(current, direction).key.as_str()
}
