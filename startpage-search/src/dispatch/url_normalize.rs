//! URL-likelihood detection and address normalisation.
//!
//! Purely syntactic: nothing here resolves hosts or touches the network.
//! The checks decide whether typed text should be opened as an address and
//! which scheme to prefix when the user left it out.

use std::sync::LazyLock;

use regex::Regex;

/// Recognised scheme prefixes, matched case-insensitively.
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?|ftp|file)://").expect("valid scheme regex"));

/// `localhost`, optional port, optional path.
static LOCALHOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^localhost(:\d+)?(/.*)?$").expect("valid localhost regex")
});

/// Bare IPv4 quad, optional port, optional path.
static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}(\.\d{1,3}){3}(:\d+)?(/.*)?$").expect("valid ipv4 regex")
});

/// `label(.label)+` ending in a 2+ letter label, optional port, optional path.
static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z0-9-]+\.)+[a-z]{2,}(:\d+)?(/.*)?$").expect("valid domain regex")
});

/// Returns `true` if `input` starts with a recognised scheme
/// (`http://`, `https://`, `ftp://`, `file://`).
pub fn has_scheme(input: &str) -> bool {
    SCHEME.is_match(input.trim())
}

/// Decide whether `input` looks like something to navigate to.
///
/// Text containing any whitespace is never URL-like. Otherwise it matches
/// when it carries a recognised scheme, is `localhost[:port][/path]`, is a
/// bare IPv4 address with optional port and path, or is domain shaped.
///
/// # Examples
///
/// ```
/// use startpage_search::dispatch::url_normalize::is_likely_url;
///
/// assert!(is_likely_url("github.com/rust-lang"));
/// assert!(is_likely_url("localhost:3000"));
/// assert!(!is_likely_url("rust borrow checker"));
/// ```
pub fn is_likely_url(input: &str) -> bool {
    let value = input.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    SCHEME.is_match(value)
        || LOCALHOST.is_match(value)
        || IPV4.is_match(value)
        || DOMAIN.is_match(value)
}

/// Turn typed text into a navigable address.
///
/// 1. Input that already has a recognised scheme is returned trimmed but
///    otherwise unchanged.
/// 2. `localhost` and bare IPv4 hosts get `http://` (see [`is_local_address`]).
/// 3. Everything else gets `https://`.
///
/// # Examples
///
/// ```
/// use startpage_search::dispatch::url_normalize::normalize;
///
/// assert_eq!(normalize("example.com"), "https://example.com");
/// assert_eq!(normalize("localhost:3000"), "http://localhost:3000");
/// assert_eq!(normalize("https://x.com"), "https://x.com");
/// ```
pub fn normalize(input: &str) -> String {
    let value = input.trim();
    if SCHEME.is_match(value) {
        return value.to_owned();
    }
    if is_local_address(value) {
        return format!("http://{value}");
    }
    format!("https://{value}")
}

/// Returns `true` if `input` is `localhost` or a bare IPv4 address as a whole
/// host, with optional port and path. These get `http://` when no scheme is given.
///
/// `localhostess.com` and `10.0.0.1.example.com` are public names and do not match.
pub fn is_local_address(input: &str) -> bool {
    let value = input.trim();
    LOCALHOST.is_match(value) || IPV4.is_match(value)
}
