//! Input classification: raw search-box text to an [`Intent`].
//!
//! Rules are tried in a fixed priority order and the first match wins:
//! URL, CVE id, e-mail, handle, then keyword search. URL-likeness is checked
//! before e-mail-likeness, so `github.com/a@b.io` opens as an address.

use std::sync::LazyLock;

use regex::Regex;

use super::url_normalize::{is_likely_url, normalize};
use crate::types::Intent;

static CVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^cve-\d{4}-\d{4,}$").expect("valid cve regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]{3,}$").expect("valid handle regex"));

/// Classify raw input.
///
/// Returns `None` when the input is empty after trimming. Keyword queries
/// carry `active_provider` unchanged; whether it exists in the catalog is
/// the resolver's concern.
///
/// # Examples
///
/// ```
/// use startpage_search::dispatch::classify::classify;
/// use startpage_search::Intent;
///
/// assert_eq!(
///     classify("cve-2021-34527", "google"),
///     Some(Intent::VulnerabilityId { id: "CVE-2021-34527".into() })
/// );
/// assert_eq!(classify("   ", "google"), None);
/// ```
pub fn classify(raw: &str, active_provider: &str) -> Option<Intent> {
    let q = raw.trim();
    if q.is_empty() {
        return None;
    }

    if is_likely_url(q) {
        return Some(Intent::Url {
            address: normalize(q),
        });
    }

    if CVE.is_match(q) {
        return Some(Intent::VulnerabilityId {
            id: q.to_uppercase(),
        });
    }

    if EMAIL.is_match(q) {
        return Some(Intent::EmailLookup {
            address: q.to_owned(),
        });
    }

    if HANDLE.is_match(q) {
        if let Some(handle) = q.strip_prefix('@') {
            return Some(Intent::HandleLookup {
                handle: handle.to_owned(),
            });
        }
    }

    Some(Intent::KeywordQuery {
        text: q.to_owned(),
        provider_key: active_provider.to_owned(),
    })
}
