//! URL extraction from raw document text

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// `http://` or `https://` (any case) followed by anything but whitespace,
/// quotes, angle brackets or parentheses
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https?://[^\s"<>()]+"#).expect("invalid URL_PATTERN regex")
});

/// Extract unique URLs in order of first occurrence
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

/// Extract unique URLs and keep at most `max_urls` of them
pub fn select_urls(text: &str, max_urls: usize) -> Vec<String> {
    let mut urls = extract_urls(text);
    urls.truncate(max_urls);
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_http_and_https() {
        let urls = extract_urls("See http://a.example/x and https://b.example/y?z=1.");
        assert_eq!(urls, vec!["http://a.example/x", "https://b.example/y?z=1."]);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(extract_urls("HTTPS://Example.com/A"), vec!["HTTPS://Example.com/A"]);
    }

    #[test]
    fn test_stops_at_delimiters() {
        let urls = extract_urls(r#"(https://a.example/x) "https://b.example" <https://c.example>"#);
        assert_eq!(urls, vec!["https://a.example/x", "https://b.example", "https://c.example"]);
    }

    #[test]
    fn test_ignores_other_schemes_and_bare_scheme() {
        assert!(extract_urls("ftp://files.example mailto:x@y.z https:// only").is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let text = "https://b.example https://a.example https://b.example https://a.example";
        assert_eq!(extract_urls(text), vec!["https://b.example", "https://a.example"]);
    }

    #[test]
    fn test_duplicates_plus_many_distinct_are_capped() {
        let mut text = "https://dup.example/ ".repeat(5);
        for i in 0..150 {
            text.push_str(&format!("https://site{}.example/ ", i));
        }

        let all = extract_urls(&text);
        assert_eq!(all.len(), 151);

        let selected = select_urls(&text, 100);
        assert_eq!(selected.len(), 100);
        let unique: HashSet<_> = selected.iter().collect();
        assert_eq!(unique.len(), 100);
        assert_eq!(selected[0], "https://dup.example/");
    }

    #[test]
    fn test_no_urls() {
        assert!(select_urls("no links here", 100).is_empty());
    }
}
