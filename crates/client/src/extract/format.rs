//! Section-title reinsertion for flat text.
//!
//! When no section could be realized, the flat fallback text still contains
//! the heading lines. Each line that matches a known title is replaced by a
//! delimiter block so the output reads like a sectioned article.
//!
//! Matching is exact-or-prefix: a trimmed line matches a title if it equals it
//! or starts with it, and the first title in encounter order wins. This is a
//! heuristic and misfires when a short title is the prefix of an unrelated
//! line (a title "The" swallows every line starting with "The").

use std::sync::LazyLock;

use regex::Regex;

use super::sections::delimiter_block;

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{4,}").expect("invalid newline regex"));

/// Titles this short (after trimming) are never used for matching.
const MAX_IGNORED_TITLE_CHARS: usize = 2;

/// Collect usable section titles from observed headings.
///
/// Drops the document title itself and titles of two characters or fewer.
pub fn section_titles<'a>(headings: impl IntoIterator<Item = &'a str>, document_title: &str) -> Vec<String> {
    headings
        .into_iter()
        .map(str::trim)
        .filter(|title| title.chars().count() > MAX_IGNORED_TITLE_CHARS && *title != document_title)
        .map(str::to_string)
        .collect()
}

/// Reinsert section boundaries into `text` using `titles`.
pub fn format_with_sections(text: &str, titles: &[String]) -> String {
    if titles.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut matched = 0usize;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if let Some(title) = matching_title(trimmed, titles) {
            parts.push(delimiter_block(title));
            matched += 1;
        } else if !trimmed.is_empty() {
            parts.push(line.to_string());
        }
    }

    let joined = parts.join("\n");
    let formatted = EXCESS_NEWLINES.replace_all(&joined, "\n\n").into_owned();

    tracing::debug!(titles = titles.len(), matched, "reinserted section titles");

    formatted
}

fn matching_title<'t>(line: &str, titles: &'t [String]) -> Option<&'t str> {
    titles
        .iter()
        .map(String::as_str)
        .find(|title| line == *title || line.starts_with(title))
}
