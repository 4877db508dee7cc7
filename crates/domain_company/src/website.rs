//! Website-domain derivation
//!
//! The registered website URL is the source of the `website_domain` the claim
//! engine matches work-email domains against. Derivation keeps the host only,
//! with any leading `www.` stripped.

/// Extracts the host of a website URL, lowercased, without a leading `www.`.
///
/// Accepts bare hosts as well as full URLs. Returns `None` when no plausible
/// host can be found.
pub fn extract_domain(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Strip scheme, then everything after the authority.
    let without_scheme = match trimmed.find("://") {
        Some(idx) => &trimmed[idx + 3..],
        None => trimmed,
    };
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    // Drop userinfo and port.
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    let host = host
        .strip_prefix("www.")
        .unwrap_or(host)
        .to_ascii_lowercase();

    if host.is_empty() || !host.contains('.') {
        return None;
    }
    Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_urls() {
        assert_eq!(
            extract_domain("https://www.acme.com/careers"),
            Some("acme.com".to_string())
        );
        assert_eq!(
            extract_domain("http://acme.co.uk"),
            Some("acme.co.uk".to_string())
        );
        assert_eq!(
            extract_domain("https://acme.com:8443/about?x=1"),
            Some("acme.com".to_string())
        );
    }

    #[test]
    fn test_bare_hosts() {
        assert_eq!(extract_domain("acme.com"), Some("acme.com".to_string()));
        assert_eq!(extract_domain("WWW.ACME.COM"), Some("acme.com".to_string()));
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("   "), None);
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain("localhost"), None);
    }
}
