//! Dispatch resolution: a classified [`Intent`] to destination addresses.
//!
//! Resolution is infallible. Structured lookups fan out to two services in
//! a fixed order; keyword queries go to the selected provider, or to the
//! first catalog entry when the selection is unknown.

use tracing::debug;

use crate::config::{fill, DispatchConfig, LookupServices};
use crate::registry::ProviderRegistry;
use crate::types::{Dispatch, Intent, Resolution};

/// Resolve a classification result.
///
/// `None` (blank input) resolves to [`Resolution::Rejected`].
pub fn resolve(
    intent: Option<&Intent>,
    registry: &ProviderRegistry,
    config: &DispatchConfig,
) -> Resolution {
    match intent {
        Some(intent) => Resolution::Dispatch(resolve_intent(intent, registry, &config.services)),
        None => Resolution::Rejected,
    }
}

/// Build the destination addresses for a single intent.
pub fn resolve_intent(
    intent: &Intent,
    registry: &ProviderRegistry,
    services: &LookupServices,
) -> Dispatch {
    let templates = services.templates();
    match intent {
        Intent::Url { address } => Dispatch::Single(address.clone()),
        Intent::VulnerabilityId { id } => Dispatch::Multiple(vec![
            fill(&templates.vulnerability_db, id),
            fill(&templates.exploit_db, id),
        ]),
        Intent::EmailLookup { address } => {
            let encoded = urlencoding::encode(address);
            let quoted = format!("\"{address}\"");
            let quoted = urlencoding::encode(&quoted);
            Dispatch::Multiple(vec![
                fill(&templates.breach_search, &encoded),
                fill(&templates.code_search, &quoted),
            ])
        }
        Intent::HandleLookup { handle } => Dispatch::Multiple(vec![
            fill(&templates.code_profile, handle),
            fill(&templates.social_profile, handle),
        ]),
        Intent::KeywordQuery { text, provider_key } => {
            let provider = registry.resolve_key(provider_key);
            if provider.key != *provider_key {
                debug!(
                    requested = %provider_key,
                    fallback = %provider.key,
                    "unknown provider key, using catalog default"
                );
            }
            Dispatch::Single(provider.query_url(text))
        }
    }
}
