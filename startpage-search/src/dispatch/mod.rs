//! Search-input dispatch: classify, resolve, normalise.
//!
//! Raw text is classified into an [`crate::Intent`], then resolved against
//! the provider registry into one or more destination addresses. Opening
//! those addresses is left to the caller.

pub mod classify;
pub mod resolve;
pub mod url_normalize;

use tracing::{debug, trace};

use crate::config::DispatchConfig;
use crate::registry::ProviderRegistry;
use crate::types::Resolution;

/// Classify and resolve raw input in one step.
pub fn dispatch(raw: &str, registry: &ProviderRegistry, config: &DispatchConfig) -> Resolution {
    trace!(query = %raw, "dispatching search input");
    let intent = classify::classify(raw, &config.active_provider);
    let resolution = resolve::resolve(intent.as_ref(), registry, config);
    match (&intent, &resolution) {
        (Some(intent), Resolution::Dispatch(dispatch)) => debug!(
            kind = intent.kind(),
            destinations = dispatch.addresses().len(),
            "resolved search input"
        ),
        _ => debug!("blank search input rejected"),
    }
    resolution
}
