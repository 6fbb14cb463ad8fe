//! Reference collection.
//!
//! Numbers outbound links in first-seen order, dropping duplicates and
//! same-site links, up to a fixed cap.

use std::collections::HashSet;

use folio_core::Reference;

/// Hard cap on references per article.
pub const MAX_REFERENCES: usize = 100;

/// Collect numbered references from link targets in document order.
///
/// A URL containing `site_domain` is a same-site link and never a reference.
/// Duplicates are matched by exact, case-sensitive string; the first
/// occurrence keeps its number. Scanning stops once `cap` references exist;
/// `cap` never exceeds [`MAX_REFERENCES`].
pub fn collect_references<'a>(
    links: impl IntoIterator<Item = &'a str>, site_domain: Option<&str>, cap: usize,
) -> Vec<Reference> {
    let cap = cap.min(MAX_REFERENCES);
    let site_domain = site_domain.filter(|d| !d.is_empty());
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for url in links {
        if references.len() >= cap {
            break;
        }

        if url.is_empty() || site_domain.is_some_and(|domain| url.contains(domain)) {
            continue;
        }

        if !seen.insert(url) {
            continue;
        }

        references.push(Reference { number: references.len() + 1, url: url.to_string() });
    }

    tracing::debug!(count = references.len(), cap, "collected references");

    references
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://source{i}.example.org/article")).collect()
    }

    #[test]
    fn test_collect_numbers_in_first_seen_order() {
        let links = ["https://a.org/", "https://b.org/", "https://a.org/", "https://c.org/"];
        let refs = collect_references(links, None, MAX_REFERENCES);

        assert_eq!(
            refs,
            vec![
                Reference { number: 1, url: "https://a.org/".into() },
                Reference { number: 2, url: "https://b.org/".into() },
                Reference { number: 3, url: "https://c.org/".into() },
            ]
        );
    }

    #[test]
    fn test_collect_is_case_sensitive() {
        let refs = collect_references(["https://a.org/Page", "https://a.org/page"], None, MAX_REFERENCES);
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_collect_excludes_site_domain() {
        let links = ["https://grokipedia.com/page/Rust", "https://rust-lang.org/", "https://www.grokipedia.com/"];
        let refs = collect_references(links, Some("grokipedia.com"), MAX_REFERENCES);
        assert_eq!(refs, vec![Reference { number: 1, url: "https://rust-lang.org/".into() }]);
    }

    #[test]
    fn test_collect_empty_domain_disables_filter() {
        let refs = collect_references(["https://grokipedia.com/"], Some(""), MAX_REFERENCES);
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_collect_caps_at_one_hundred() {
        let links = urls(150);
        let refs = collect_references(links.iter().map(String::as_str), None, MAX_REFERENCES);

        assert_eq!(refs.len(), 100);
        for (i, reference) in refs.iter().enumerate() {
            assert_eq!(reference.number, i + 1);
            assert_eq!(reference.url, links[i]);
        }
    }

    #[test]
    fn test_collect_larger_cap_is_clamped() {
        let links = urls(150);
        let refs = collect_references(links.iter().map(String::as_str), None, 150);
        assert_eq!(refs.len(), MAX_REFERENCES);
        assert_eq!(refs.last().map(|r| r.number), Some(100));
    }

    #[test]
    fn test_collect_duplicates_do_not_consume_cap() {
        let mut links = vec!["https://dup.org/".to_string(); 50];
        links.extend(urls(3));
        let refs = collect_references(links.iter().map(String::as_str), None, 4);
        assert_eq!(refs.len(), 4);
        assert_eq!(refs[0].url, "https://dup.org/");
        assert_eq!(refs[3].number, 4);
    }

    #[test]
    fn test_collect_skips_empty_urls() {
        let refs = collect_references(["", "https://a.org/"], None, MAX_REFERENCES);
        assert_eq!(refs, vec![Reference { number: 1, url: "https://a.org/".into() }]);
    }
}
