//! URL validation and normalization.
//!
//! Canonicalizes submitted URLs so the idempotent-by-original-url lookup
//! matches equivalent spellings of the same address.

use url::Url;

/// Maximum accepted length for an original URL, matching the storage column.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL exceeds the maximum length of {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a URL to a canonical form.
///
/// Rules: scheme must be `http` or `https`, host is lowercased, default
/// ports (80/443) and fragments are stripped, path and query are preserved
/// as-is. Dangerous schemes (`javascript:`, `data:`, `file:`) are rejected
/// by the scheme allow-list. Result must fit in [`MAX_URL_LENGTH`].
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_strips_default_ports() {
        assert_eq!(
            normalize_url("https://example.com:443/p").unwrap(),
            "https://example.com/p"
        );
        assert_eq!(
            normalize_url("http://example.com:80/p").unwrap(),
            "http://example.com/p"
        );
    }

    #[test]
    fn test_keeps_custom_port() {
        assert_eq!(
            normalize_url("http://example.com:8080/p").unwrap(),
            "http://example.com:8080/p"
        );
    }

    #[test]
    fn test_strips_fragment_keeps_query() {
        assert_eq!(
            normalize_url("https://example.com/page?a=1#section").unwrap(),
            "https://example.com/page?a=1"
        );
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "data:text/plain,hi",
            "file:///etc/passwd",
            "mailto:x@example.com",
        ] {
            assert!(matches!(
                normalize_url(input).unwrap_err(),
                UrlNormalizationError::UnsupportedProtocol
            ));
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["", "not a url", "example.com"] {
            assert!(matches!(
                normalize_url(input).unwrap_err(),
                UrlNormalizationError::InvalidFormat(_)
            ));
        }
    }

    #[test]
    fn test_rejects_over_long_urls() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            normalize_url(&long).unwrap_err(),
            UrlNormalizationError::TooLong
        ));
    }

    #[test]
    fn test_accepts_urls_at_the_limit() {
        let prefix = "https://example.com/";
        let url = format!("{}{}", prefix, "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert!(normalize_url(&url).is_ok());
    }

    #[test]
    fn test_equivalent_spellings_normalize_identically() {
        let a = normalize_url("HTTPS://Example.COM:443/page").unwrap();
        let b = normalize_url("https://example.com/page").unwrap();
        assert_eq!(a, b);
    }
}
