//! Result assembly.

use folio_core::article::UNTITLED;
use folio_core::{Error, ExtractionResult, Reference, Section};

/// Size metrics of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Unicode scalar values.
    pub char_count: usize,
}

pub fn measure(text: &str) -> TextMetrics {
    TextMetrics { word_count: text.split_whitespace().count(), char_count: text.chars().count() }
}

/// Everything a run produced, before packaging.
#[derive(Debug, Clone, Default)]
pub struct ArticleParts {
    pub title: Option<String>,
    pub url: String,
    /// Final text, after any section-title formatting.
    pub content_text: String,
    pub references: Vec<Reference>,
    pub sections: Vec<Section>,
    pub section_titles: Vec<String>,
}

/// Package the final result, measuring the final text.
///
/// Fails only when there is neither a title nor any content.
pub fn assemble(parts: ArticleParts) -> Result<ExtractionResult, Error> {
    let ArticleParts { title, url, content_text, references, sections, section_titles } = parts;

    if title.is_none() && content_text.trim().is_empty() {
        return Err(Error::ExtractFailed(format!("Failed to scrape article: no title and no content found at {url}")));
    }

    let metrics = measure(&content_text);
    let structured_content = (!sections.is_empty()).then_some(sections);
    let section_titles = (structured_content.is_none() && !section_titles.is_empty()).then_some(section_titles);

    Ok(ExtractionResult {
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        url,
        content_text,
        word_count: metrics.word_count,
        char_count: metrics.char_count,
        references_count: references.len(),
        references,
        structured_content,
        section_titles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> ArticleParts {
        ArticleParts {
            title: Some("Rust".into()),
            url: "https://grokipedia.com/page/Rust".into(),
            content_text: "Rust is a  language.\n\nIt is fast.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_measure_counts_words_and_chars() {
        let m = measure("  one two\n\nthree\tfour ");
        assert_eq!(m, TextMetrics { word_count: 4, char_count: 22 });
    }

    #[test]
    fn test_measure_counts_characters_not_bytes() {
        assert_eq!(measure("héllo wörld").char_count, 11);
    }

    #[test]
    fn test_assemble_metrics_match_final_text() {
        let result = assemble(parts()).unwrap();
        assert_eq!(result.word_count, result.content_text.split_whitespace().count());
        assert_eq!(result.char_count, result.content_text.chars().count());
    }

    #[test]
    fn test_assemble_structured_hides_section_titles() {
        let result = assemble(ArticleParts {
            sections: vec![Section { title: "History".into(), level: 2, paragraphs: vec!["Body".into()] }],
            section_titles: vec!["History".into()],
            ..parts()
        })
        .unwrap();

        assert_eq!(result.structured_content.map(|s| s.len()), Some(1));
        assert!(result.section_titles.is_none());
    }

    #[test]
    fn test_assemble_flat_reports_section_titles() {
        let result = assemble(ArticleParts { section_titles: vec!["History".into()], ..parts() }).unwrap();
        assert!(result.structured_content.is_none());
        assert_eq!(result.section_titles, Some(vec!["History".to_string()]));
    }

    #[test]
    fn test_assemble_empty_collections_are_absent() {
        let result = assemble(parts()).unwrap();
        assert!(result.structured_content.is_none());
        assert!(result.section_titles.is_none());
        assert_eq!(result.references_count, 0);
    }

    #[test]
    fn test_assemble_counts_references() {
        let references = vec![
            Reference { number: 1, url: "https://a.org/".into() },
            Reference { number: 2, url: "https://b.org/".into() },
        ];
        let result = assemble(ArticleParts { references, ..parts() }).unwrap();
        assert_eq!(result.references_count, 2);
    }

    #[test]
    fn test_assemble_defaults_missing_title() {
        let result = assemble(ArticleParts { title: None, ..parts() }).unwrap();
        assert_eq!(result.title, "Title not found");
    }

    #[test]
    fn test_assemble_title_without_content_succeeds() {
        let result = assemble(ArticleParts { content_text: String::new(), ..parts() }).unwrap();
        assert_eq!(result.word_count, 0);
    }

    #[test]
    fn test_assemble_fails_without_title_or_content() {
        let result = assemble(ArticleParts { title: None, content_text: "  \n ".into(), ..parts() });
        let err = result.unwrap_err();
        assert!(matches!(err, Error::ExtractFailed(_)));
        assert!(err.to_string().contains("no title and no content"));
    }
}
