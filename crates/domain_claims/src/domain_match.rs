//! Email-domain matching for the automated verification path
//!
//! A claim qualifies for automated verification only when the domain of the
//! supplied work email exactly equals the company's registered website domain,
//! compared case-insensitively. No subdomain or similarity matching.

/// Extracts the domain portion of an email address, lowercased.
///
/// Returns `None` when the input has no `@` or nothing after it.
pub fn email_domain(email: &str) -> Option<String> {
    let domain = email.split('@').nth(1)?.trim().to_ascii_lowercase();
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Whether the email's domain exactly matches the company's website domain.
///
/// A company without a registered website domain can never match.
pub fn matches(email: &str, website_domain: Option<&str>) -> bool {
    let company = match website_domain {
        Some(d) if !d.trim().is_empty() => d.trim().to_ascii_lowercase(),
        _ => return false,
    };
    match email_domain(email) {
        Some(supplied) => supplied == company,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain_extraction() {
        assert_eq!(email_domain("a@acme.com"), Some("acme.com".to_string()));
        assert_eq!(email_domain("a@ACME.COM"), Some("acme.com".to_string()));
        assert_eq!(email_domain("no-at-sign"), None);
        assert_eq!(email_domain("trailing@"), None);
    }

    #[test]
    fn test_exact_match_only() {
        assert!(matches("a@acme.com", Some("acme.com")));
        assert!(matches("a@Acme.Com", Some("ACME.com")));
        assert!(!matches("a@mail.acme.com", Some("acme.com")));
        assert!(!matches("a@acme.co", Some("acme.com")));
        assert!(!matches("a@gmail.com", Some("acme.com")));
    }

    #[test]
    fn test_missing_company_domain_never_matches() {
        assert!(!matches("a@acme.com", None));
        assert!(!matches("a@acme.com", Some("")));
        assert!(!matches("a@acme.com", Some("   ")));
    }
}
