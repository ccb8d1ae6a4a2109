//! URL syntax validation.
//!
//! The reputation service is metered, so every URL is checked locally before a
//! request is spent on it. The check is a pluggable capability: the client only
//! depends on the [`UrlValidator`] trait.

use log::debug;
use url::{Host, Url};

use crate::config::MAX_URL_LENGTH;

/// Decides whether a string is a syntactically valid URL worth scanning.
pub trait UrlValidator: Send + Sync {
    /// Returns `true` if `url` should be sent to the reputation service.
    fn validate(&self, url: &str) -> bool;
}

impl<F> UrlValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, url: &str) -> bool {
        self(url)
    }
}

/// Default validator: absolute `http`, `https` or `ftp` URLs with a public-looking host.
///
/// Accepts:
/// - `https://example.com`, `http://sub.example.co.uk/path?q=1`
/// - IPv4 and IPv6 literal hosts (`http://192.0.2.1`, `http://[2001:db8::1]`)
///
/// Rejects:
/// - bare words and relative references (`google`, `example.com`)
/// - empty input, input containing whitespace, input over 2048 characters
/// - hosts without a dotted, alphabetic top-level domain (`http://google`)
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlSyntaxValidator;

impl UrlValidator for UrlSyntaxValidator {
    fn validate(&self, url: &str) -> bool {
        if url.is_empty() || url.len() > MAX_URL_LENGTH {
            return false;
        }
        if url.chars().any(char::is_whitespace) {
            debug!("Rejecting URL containing whitespace: {url}");
            return false;
        }

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Rejecting unparsable URL {url}: {e}");
                return false;
            }
        };

        match parsed.scheme() {
            "http" | "https" | "ftp" => {}
            scheme => {
                debug!("Rejecting URL with unsupported scheme '{scheme}': {url}");
                return false;
            }
        }

        match parsed.host() {
            Some(Host::Domain(domain)) => is_valid_domain(domain),
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
            None => false,
        }
    }
}

/// Checks that a domain has at least two labels, well-formed labels, and an
/// alphabetic (or punycode) top-level domain.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    });

    let tld = labels[labels.len() - 1];
    let tld_ok = tld.starts_with("xn--")
        || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}
