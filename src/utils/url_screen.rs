//! Basic malicious-URL screening.
//!
//! A small static blacklist: nested shortener domains plus a handful of
//! obviously hostile keywords. This is a coarse filter, not a reputation
//! service.

use url::Url;

/// Domains that are refused outright. Nested shorteners defeat analytics
/// and hide the final destination.
const BLOCKED_DOMAINS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "short.link",
    "malware.com",
    "phishing.com",
];

const BLOCKED_KEYWORDS: &[&str] = &["phishing", "malware", "virus", "hack", "scam"];

/// Returns true if the URL matches the domain blacklist or contains a
/// blocked keyword anywhere in its text.
///
/// Expects an already-validated URL; unparseable input screens clean and is
/// left to the normalizer to reject.
pub fn is_suspicious_url(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();

    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            let host = host.to_ascii_lowercase();
            if BLOCKED_DOMAINS.iter().any(|d| host.contains(d)) {
                return true;
            }
        }
    }

    BLOCKED_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_passes() {
        assert!(!is_suspicious_url("https://example.com/page"));
        assert!(!is_suspicious_url("https://docs.rs/axum/latest"));
    }

    #[test]
    fn test_blocked_domains() {
        assert!(is_suspicious_url("https://bit.ly/abc"));
        assert!(is_suspicious_url("https://tinyurl.com/xyz"));
        assert!(is_suspicious_url("https://phishing.com/login"));
    }

    #[test]
    fn test_blocked_subdomains() {
        assert!(is_suspicious_url("https://evil.bit.ly/abc"));
    }

    #[test]
    fn test_blocked_keywords_anywhere() {
        assert!(is_suspicious_url("https://example.com/free-malware-download"));
        assert!(is_suspicious_url("https://example.com/?q=PHISHING"));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert!(is_suspicious_url("https://example.com/SCAM"));
    }
}
