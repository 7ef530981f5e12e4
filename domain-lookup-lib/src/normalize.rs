//! Hostname normalization for raw input lines.
//!
//! Input files may mix bare hostnames with URL-prefixed entries
//! (`https://example.com/`, `example.com:`). This module reduces any raw
//! line to a bare hostname before resolution and probing.

/// Normalize a raw input line into a bare hostname.
///
/// Rules:
/// - If the line has a `scheme://` prefix, the authority component is used
///   (everything between `://` and the next `/`).
/// - Otherwise the trimmed line itself is used, cut at the first `/`.
/// - Any trailing `:` left over from a scheme-less `host:` form is stripped.
///
/// This function never fails. Malformed input yields some hostname, possibly
/// empty; resolving an empty hostname downstream fails gracefully into the
/// sentinel, it does not crash.
///
/// # Examples
///
/// ```
/// use domain_lookup_lib::clean_domain;
///
/// assert_eq!(clean_domain("https://example.com:"), "example.com");
/// assert_eq!(clean_domain("example.com"), "example.com");
/// ```
pub fn clean_domain(raw: &str) -> String {
    let trimmed = raw.trim();

    let after_scheme = match trimmed.find("://") {
        Some(idx) => &trimmed[idx + 3..],
        None => trimmed,
    };

    // Authority ends at the first path separator
    let host = match after_scheme.find('/') {
        Some(idx) => &after_scheme[..idx],
        None => after_scheme,
    };

    host.trim_end_matches(':').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_and_trailing_colon() {
        assert_eq!(clean_domain("https://example.com:"), "example.com");
        assert_eq!(clean_domain("http://example.com"), "example.com");
        assert_eq!(clean_domain("https://example.com/"), "example.com");
        assert_eq!(clean_domain("http://example.com/some/path"), "example.com");
    }

    #[test]
    fn test_schemeless_input_passes_through_trimmed() {
        assert_eq!(clean_domain("example.com"), "example.com");
        assert_eq!(clean_domain("  example.com  "), "example.com");
        assert_eq!(clean_domain("example.com:"), "example.com");
        assert_eq!(clean_domain("example.com/path"), "example.com");
    }

    #[test]
    fn test_never_fails_on_malformed_input() {
        assert_eq!(clean_domain(""), "");
        assert_eq!(clean_domain("://"), "");
        assert_eq!(clean_domain(":::"), "");
        assert_eq!(clean_domain("ftp://files.example.org"), "files.example.org");
    }

    #[test]
    fn test_subdomains_kept_intact() {
        assert_eq!(
            clean_domain("https://deep.sub.example.co.uk"),
            "deep.sub.example.co.uk"
        );
    }
}
