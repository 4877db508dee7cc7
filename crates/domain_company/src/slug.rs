//! Slug derivation for company routing keys

/// Derives a URL slug from a company name: lowercased, runs of
/// non-alphanumeric characters collapsed to a single hyphen, trimmed.
pub fn generate(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugs() {
        assert_eq!(generate("Acme Recruitment"), "acme-recruitment");
        assert_eq!(generate("Hays & Co."), "hays-co");
        assert_eq!(generate("  Spaced   Out  "), "spaced-out");
    }

    #[test]
    fn test_edges_are_trimmed() {
        assert_eq!(generate("---Acme---"), "acme");
        assert_eq!(generate("!!!"), "");
    }

    #[test]
    fn test_idempotent_on_existing_slug() {
        assert_eq!(generate("acme-recruitment"), "acme-recruitment");
    }
}
