//! HTTP request handlers.

pub(crate) mod content;
pub(crate) mod page_contents;
pub(crate) mod pages;
pub(crate) mod servers;

use axum::http::{HeaderMap, header};

/// Hostname used when a request carries no Host header.
const FALLBACK_HOST: &str = "localhost";

/// Extract the request hostname from the Host header, without the
/// optional port.
pub(crate) fn request_host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map_or(FALLBACK_HOST, strip_port)
}

/// Strip an optional `:port` suffix from a Host header value.
///
/// IPv6 literals keep their brackets, so `[::1]:8000` becomes `[::1]`.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        host.split_once(':').map_or(host, |(name, _)| name)
    }
}

/// Extract the language hint for a request.
///
/// Uses the primary subtag of the first Accept-Language entry,
/// lowercased. Falls back to the configured default when the header is
/// missing or carries no usable tag (such as `*`).
pub(crate) fn request_language(headers: &HeaderMap, default: &str) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(first_language_tag)
        .unwrap_or_else(|| default.to_string())
}

/// Primary subtag of the first entry in an Accept-Language value.
fn first_language_tag(value: &str) -> Option<String> {
    let entry = value.split(',').next()?;
    let tag = entry.split(';').next()?.trim();
    let primary = tag.split('-').next()?;
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn headers(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(name, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn test_request_host_strips_port() {
        let map = headers(header::HOST, "example.com:8080");
        assert_eq!(request_host(&map), "example.com");
    }

    #[test]
    fn test_request_host_without_port() {
        let map = headers(header::HOST, "example.com");
        assert_eq!(request_host(&map), "example.com");
    }

    #[test]
    fn test_request_host_keeps_ipv6_brackets() {
        let map = headers(header::HOST, "[::1]:8000");
        assert_eq!(request_host(&map), "[::1]");
    }

    #[test]
    fn test_request_host_missing_header_falls_back() {
        assert_eq!(request_host(&HeaderMap::new()), "localhost");
    }

    #[test]
    fn test_request_language_primary_subtag() {
        let map = headers(header::ACCEPT_LANGUAGE, "fi-FI,fi;q=0.9,en;q=0.8");
        assert_eq!(request_language(&map, "en"), "fi");
    }

    #[test]
    fn test_request_language_lowercases() {
        let map = headers(header::ACCEPT_LANGUAGE, "DE");
        assert_eq!(request_language(&map, "en"), "de");
    }

    #[test]
    fn test_request_language_wildcard_uses_default() {
        let map = headers(header::ACCEPT_LANGUAGE, "*");
        assert_eq!(request_language(&map, "en"), "en");
    }

    #[test]
    fn test_request_language_missing_header_uses_default() {
        assert_eq!(request_language(&HeaderMap::new(), "sv"), "sv");
    }
}
