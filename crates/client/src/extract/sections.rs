//! Section grouping.
//!
//! Walks the classified stream once, left to right, attaching each paragraph
//! to the nearest preceding heading. A section is sealed when the next heading
//! arrives or the stream ends, and only kept if it gathered at least one
//! paragraph. Paragraphs seen before the first heading belong to no section
//! and are dropped.

use folio_core::Section;

use super::classify::ClassifiedElement;

/// Width of the `=` rules framing a section title in flat text.
pub const DELIMITER_WIDTH: usize = 70;

/// Render the block that marks a section boundary in flat text:
/// a blank line, a rule, the title, a rule, a blank line.
pub fn delimiter_block(title: &str) -> String {
    let rule = "=".repeat(DELIMITER_WIDTH);
    format!("\n\n{rule}\n{title}\n{rule}\n\n")
}

/// Sections realized from one classified stream, plus their flat rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    pub sections: Vec<Section>,
    pub content_text: String,
    /// Headings dropped because no paragraph followed them.
    pub discarded_headings: usize,
}

impl Grouping {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    fn seal(&mut self, section: Section) {
        if section.paragraphs.is_empty() {
            tracing::trace!(title = %section.title, "discarding heading without paragraphs");
            self.discarded_headings += 1;
            return;
        }

        self.content_text.push_str(&delimiter_block(&section.title));
        self.content_text.push_str(&section.paragraphs.join("\n\n"));
        self.sections.push(section);
    }
}

/// Group paragraphs under their headings.
pub fn group_sections(elements: &[ClassifiedElement]) -> Grouping {
    let mut grouping = Grouping::default();
    let mut current: Option<Section> = None;

    for element in elements {
        match element {
            ClassifiedElement::Heading { level, text, .. } => {
                if let Some(section) = current.take() {
                    grouping.seal(section);
                }
                current = Some(Section { title: text.clone(), level: *level, paragraphs: Vec::new() });
            }
            ClassifiedElement::Paragraph { text, .. } => {
                if let Some(section) = current.as_mut() {
                    section.paragraphs.push(text.clone());
                }
            }
        }
    }

    if let Some(section) = current {
        grouping.seal(section);
    }

    tracing::debug!(
        sections = grouping.sections.len(),
        paragraphs = grouping.paragraph_count(),
        discarded_headings = grouping.discarded_headings,
        "grouped sections"
    );

    grouping
}
