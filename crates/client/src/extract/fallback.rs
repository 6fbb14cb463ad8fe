//! Fallback chain for flat article text.
//!
//! Tiers run in [`Tier::CHAIN`] order; the first whose output clears its own
//! threshold wins and later tiers are never produced. Thresholds count
//! characters, not bytes or words.

use std::fmt;

use super::ExtractConfig;
use super::classify::ClassifiedElement;

/// One strategy in the degradation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Flat rendering of the grouped sections.
    Structured,
    /// Every prose paragraph in the container, headings ignored.
    ParagraphList,
    /// Full text of the content container.
    ContainerText,
    /// Full text of the document body. Terminal.
    BodyText,
}

impl Tier {
    pub const CHAIN: [Tier; 4] = [Tier::Structured, Tier::ParagraphList, Tier::ContainerText, Tier::BodyText];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Structured => "structured",
            Tier::ParagraphList => "paragraph_list",
            Tier::ContainerText => "container_text",
            Tier::BodyText => "body_text",
        }
    }

    /// Produce this tier's text, or `None` when its source is unavailable.
    fn produce(self, input: &TierInput<'_>) -> Option<String> {
        match self {
            Tier::Structured => Some(input.structured.to_string()),
            Tier::ParagraphList => Some(paragraph_list(input.elements)),
            Tier::ContainerText => input.container_text.map(str::to_string),
            Tier::BodyText => Some(input.body_text.to_string()),
        }
    }

    fn is_sufficient(self, text: &str, config: &ExtractConfig) -> bool {
        match self {
            Tier::Structured => !text.is_empty() && text.chars().count() >= config.structured_min_chars,
            Tier::ParagraphList => !text.is_empty() && text.chars().count() >= config.paragraph_min_chars,
            Tier::ContainerText => !text.trim().is_empty(),
            Tier::BodyText => true,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources the tiers draw from.
#[derive(Debug, Clone, Copy)]
pub struct TierInput<'a> {
    pub structured: &'a str,
    /// Container-scoped elements.
    pub elements: &'a [ClassifiedElement],
    pub container_text: Option<&'a str>,
    pub body_text: &'a str,
}

/// Text chosen by the chain and the tier that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOutcome {
    pub tier: Tier,
    pub text: String,
}

/// Run the chain until a tier clears its threshold.
pub fn run_chain(input: &TierInput<'_>, config: &ExtractConfig) -> FallbackOutcome {
    for tier in Tier::CHAIN {
        let Some(text) = tier.produce(input) else {
            tracing::debug!(%tier, "tier unavailable");
            continue;
        };

        if tier.is_sufficient(&text, config) {
            return FallbackOutcome { tier, text };
        }

        tracing::debug!(%tier, chars = text.chars().count(), "tier output insufficient");
    }

    FallbackOutcome { tier: Tier::BodyText, text: input.body_text.to_string() }
}

fn paragraph_list(elements: &[ClassifiedElement]) -> String {
    elements
        .iter()
        .filter_map(|element| match element {
            ClassifiedElement::Paragraph { text, .. } => Some(text.as_str()),
            ClassifiedElement::Heading { .. } => None,
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
