//! Core Generator implementation

use crate::chunking::TextChunker;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::parser::parse_flashcards;
use crate::prompt::PromptCatalog;
use crate::types::{ChunkFailure, FlashcardPanel, GeneratedArtifact, Progress, StudyGuide};
use std::fmt::Display;
use studyguide_domain::traits::LlmProvider;
use studyguide_domain::{ArtifactKind, Difficulty};
use tracing::{debug, info, warn};

/// Prefix of the inline marker written in place of a failed chunk's response
pub const CHUNK_ERROR_PREFIX: &str = "Error processing a chunk: ";

/// Runs prompt-templated generation passes over document chunks
///
/// Chunks are processed one at a time, in order. A failed call never aborts
/// a pass: its error message is written inline and generation continues with
/// the next chunk.
pub struct Generator<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: GeneratorConfig,
}

impl<L> Generator<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new Generator
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the configuration is invalid.
    pub fn new(llm_provider: L, config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            llm_provider,
            config,
        })
    }

    /// The generation service
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Split document text into chunks with the configured budget
    pub fn chunk(&self, text: &str) -> Vec<String> {
        TextChunker::new(self.config.max_chunk_size).chunk(text)
    }

    /// Generate one artifact over `chunks`
    ///
    /// Each response (or error marker) is appended followed by a blank line.
    /// `on_progress` is called after every chunk with `completed = i + 1`.
    pub fn generate(
        &self,
        chunks: &[String],
        kind: ArtifactKind,
        difficulty: Difficulty,
        mut on_progress: impl FnMut(Progress),
    ) -> GeneratedArtifact {
        let total = chunks.len();
        let mut text = String::new();
        let mut failures = Vec::new();

        info!(
            "Generating {} ({}) over {} chunks with {}",
            kind,
            difficulty.as_str(),
            total,
            self.llm_provider.model_name()
        );

        for (index, chunk) in chunks.iter().enumerate() {
            let prompt = PromptCatalog::render(kind, difficulty, chunk);
            debug!("Chunk {}/{}: prompt length {} chars", index + 1, total, prompt.len());

            match self.llm_provider.generate(&prompt) {
                Ok(response) => {
                    text.push_str(&response);
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!("Chunk {}/{} failed for {}: {}", index + 1, total, kind, message);
                    text.push_str(CHUNK_ERROR_PREFIX);
                    text.push_str(&message);
                    failures.push(ChunkFailure { index, message });
                }
            }
            text.push_str("\n\n");

            on_progress(Progress {
                completed: index + 1,
                total,
            });
        }

        if !failures.is_empty() {
            warn!("{} of {} chunks failed for {}", failures.len(), total, kind);
        }

        GeneratedArtifact {
            kind,
            difficulty,
            text,
            chunk_count: total,
            failures,
        }
    }

    /// Produce a full study guide from document text
    ///
    /// Runs the summary, question/answer and flashcard passes in that order
    /// over the same chunks, then parses the flashcard output. If no card can
    /// be parsed the flashcard panel falls back to the raw text.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyDocument`] for blank text. Generation
    /// failures are reported inside the artifacts, not as errors.
    pub fn study_guide(
        &self,
        document_text: &str,
        difficulty: Difficulty,
        mut on_progress: impl FnMut(ArtifactKind, Progress),
    ) -> Result<StudyGuide, GeneratorError> {
        if document_text.trim().is_empty() {
            return Err(GeneratorError::EmptyDocument);
        }

        let chunks = self.chunk(document_text);
        info!(
            "Document split into {} chunks (budget {} chars)",
            chunks.len(),
            self.config.max_chunk_size
        );

        let mut run = |kind: ArtifactKind| {
            self.generate(&chunks, kind, difficulty, |progress| on_progress(kind, progress))
        };

        let summary = run(ArtifactKind::Summary);
        let qa = run(ArtifactKind::Qa);
        let flashcards_raw = run(ArtifactKind::Flashcards);

        let deck = parse_flashcards(&flashcards_raw.text);
        if deck.is_empty() {
            warn!("No flashcards could be parsed; showing raw output");
        }
        let flashcards = FlashcardPanel::from_parsed(deck, &flashcards_raw.text);

        Ok(StudyGuide {
            source: None,
            difficulty,
            summary,
            qa,
            flashcards_raw,
            flashcards,
        })
    }
}
