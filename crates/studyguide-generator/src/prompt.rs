//! Prompt catalog: one template per artifact kind and difficulty

use studyguide_domain::{ArtifactKind, Difficulty};

/// Insertion point for the chunk text
pub const TEXT_PLACEHOLDER: &str = "{text}";

const SUMMARY_BEGINNER: &str = "Explain the main points of this text in simple, easy-to-understand language. Avoid jargon and keep sentences short.\n\nText: \"\"\"{text}\"\"\"";
const SUMMARY_INTERMEDIATE: &str = "Provide a detailed summary covering the key arguments, supporting evidence and conclusions of this text.\n\nText: \"\"\"{text}\"\"\"";
const SUMMARY_ADVANCED: &str = "Create a critical summary for a graduate-level audience. Highlight assumptions, limitations and connections to the wider field.\n\nText: \"\"\"{text}\"\"\"";

const QA_BEGINNER: &str = "Generate basic factual questions and answers that check recall of the key facts in this text. Write each as 'Q:' followed by 'A:'.\n\nText: \"\"\"{text}\"\"\"";
const QA_INTERMEDIATE: &str = "Generate questions that require understanding relationships between the ideas in this text, with a clear answer for each. Write each as 'Q:' followed by 'A:'.\n\nText: \"\"\"{text}\"\"\"";
const QA_ADVANCED: &str = "Generate challenging questions that require critical thinking, analysis or application of this text, with a model answer for each. Write each as 'Q:' followed by 'A:'.\n\nText: \"\"\"{text}\"\"\"";

const FLASHCARDS_BEGINNER: &str = "Identify 5-7 fundamental terms from this text. For each, provide a 'Term:' on one line and a 'Definition:' on the next, suitable for a beginner.\n\nText: \"\"\"{text}\"\"\"";
const FLASHCARDS_INTERMEDIATE: &str = "Identify 5-7 important technical terms from this text. For each, provide a 'Term:' on one line and a 'Definition:' on the next, suitable for a college student.\n\nText: \"\"\"{text}\"\"\"";
const FLASHCARDS_ADVANCED: &str = "Identify 5-7 nuanced or highly technical terms from this text. For each, provide a 'Term:' on one line and a 'Definition:' on the next, suitable for an expert.\n\nText: \"\"\"{text}\"\"\"";

/// Static mapping from (artifact kind, difficulty) to a prompt template
///
/// # Examples
///
/// ```
/// use studyguide_domain::{ArtifactKind, Difficulty};
/// use studyguide_generator::PromptCatalog;
///
/// let prompt =
///     PromptCatalog::render(ArtifactKind::Flashcards, Difficulty::Beginner, "Cells divide.");
/// assert!(prompt.contains("'Term:'"));
/// assert!(prompt.ends_with("\"\"\"Cells divide.\"\"\""));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptCatalog;

impl PromptCatalog {
    /// The template for `kind` at `difficulty`
    pub fn template(kind: ArtifactKind, difficulty: Difficulty) -> &'static str {
        match (kind, difficulty) {
            (ArtifactKind::Summary, Difficulty::Beginner) => SUMMARY_BEGINNER,
            (ArtifactKind::Summary, Difficulty::Intermediate) => SUMMARY_INTERMEDIATE,
            (ArtifactKind::Summary, Difficulty::Advanced) => SUMMARY_ADVANCED,
            (ArtifactKind::Qa, Difficulty::Beginner) => QA_BEGINNER,
            (ArtifactKind::Qa, Difficulty::Intermediate) => QA_INTERMEDIATE,
            (ArtifactKind::Qa, Difficulty::Advanced) => QA_ADVANCED,
            (ArtifactKind::Flashcards, Difficulty::Beginner) => FLASHCARDS_BEGINNER,
            (ArtifactKind::Flashcards, Difficulty::Intermediate) => FLASHCARDS_INTERMEDIATE,
            (ArtifactKind::Flashcards, Difficulty::Advanced) => FLASHCARDS_ADVANCED,
        }
    }

    /// Fill the template's insertion point with `chunk`
    ///
    /// The chunk is inserted verbatim; braces inside it are not interpreted.
    pub fn render(kind: ArtifactKind, difficulty: Difficulty, chunk: &str) -> String {
        Self::template(kind, difficulty).replacen(TEXT_PLACEHOLDER, chunk, 1)
    }

    /// Every (kind, difficulty, template) entry, in catalog order
    pub fn entries() -> impl Iterator<Item = (ArtifactKind, Difficulty, &'static str)> {
        ArtifactKind::ALL.into_iter().flat_map(|kind| {
            Difficulty::ALL
                .into_iter()
                .map(move |difficulty| (kind, difficulty, Self::template(kind, difficulty)))
        })
    }
}
