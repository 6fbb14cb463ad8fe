//! Element classification.
//!
//! Turns raw [`PageElement`] records into a typed heading/paragraph stream,
//! dropping noise. Each element is judged on its own; order is preserved.

use folio_core::PageElement;

/// Texts shorter than this (after trimming) are icons, empty anchors and the like.
const MIN_TEXT_CHARS: usize = 3;

/// Paragraphs must be longer than this to count as prose rather than UI chrome.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// A page element that survived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedElement {
    Heading { level: u8, text: String, order: usize },
    Paragraph { text: String, order: usize },
}

impl ClassifiedElement {
    pub fn text(&self) -> &str {
        match self {
            ClassifiedElement::Heading { text, .. } | ClassifiedElement::Paragraph { text, .. } => text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ClassifiedElement::Heading { .. })
    }
}

/// Classify raw elements, keeping document order.
pub fn classify(elements: &[PageElement]) -> Vec<ClassifiedElement> {
    elements.iter().filter_map(classify_one).collect()
}

fn classify_one(element: &PageElement) -> Option<ClassifiedElement> {
    let text = element.text.trim();
    let len = text.chars().count();
    if len < MIN_TEXT_CHARS {
        return None;
    }

    let tag = element.tag.trim().to_ascii_lowercase();
    if tag == "p" {
        return (len > MIN_PARAGRAPH_CHARS)
            .then(|| ClassifiedElement::Paragraph { text: text.to_string(), order: element.order });
    }

    match heading_level(&tag) {
        Some(level) => Some(ClassifiedElement::Heading { level, text: text.to_string(), order: element.order }),
        None => {
            tracing::trace!(tag = %element.tag, order = element.order, "skipping unclassifiable element");
            None
        }
    }
}

/// Parse the rank out of an `hN` tag, accepting only 1 through 6.
fn heading_level(tag: &str) -> Option<u8> {
    let rank = tag.strip_prefix('h')?;
    match rank.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}
