//! Result types for generation

use serde::Serialize;
use serde_json::{json, Value};
use studyguide_domain::{ArtifactKind, Difficulty, Flashcard};

/// Progress of a generation pass, reported after every chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Chunks processed so far (successful or not)
    pub completed: usize,

    /// Total chunks in the pass
    pub total: usize,
}

impl Progress {
    /// Completed share in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }

    /// Whether every chunk has been processed
    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// A chunk whose generation call failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkFailure {
    /// Zero-based chunk index
    pub index: usize,

    /// Error message, as rendered inline in the artifact text
    pub message: String,
}

/// Aggregated output of one generation pass
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Which artifact was generated
    pub kind: ArtifactKind,

    /// Difficulty used for every prompt
    pub difficulty: Difficulty,

    /// Per-chunk responses or error markers, in chunk order, each followed by a blank line
    pub text: String,

    /// Number of chunks processed
    pub chunk_count: usize,

    /// Chunks that failed, in order
    pub failures: Vec<ChunkFailure>,
}

impl GeneratedArtifact {
    /// Chunks that produced a response
    pub fn succeeded(&self) -> usize {
        self.chunk_count - self.failures.len()
    }

    /// Whether every chunk failed
    pub fn all_failed(&self) -> bool {
        self.chunk_count > 0 && self.failures.len() == self.chunk_count
    }
}

/// What the flashcard panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashcardPanel {
    /// Parsed deck, at least one card
    Deck(Vec<Flashcard>),

    /// Parsing found no cards; the raw generated text is shown instead
    Raw {
        /// Unparsed flashcard-pass output
        text: String,
    },
}

impl FlashcardPanel {
    /// Build the panel from the flashcard pass output
    pub fn from_parsed(deck: Vec<Flashcard>, raw: &str) -> Self {
        if deck.is_empty() {
            FlashcardPanel::Raw {
                text: raw.to_string(),
            }
        } else {
            FlashcardPanel::Deck(deck)
        }
    }

    /// The parsed deck (empty for the raw fallback)
    pub fn deck(&self) -> &[Flashcard] {
        match self {
            FlashcardPanel::Deck(deck) => deck,
            FlashcardPanel::Raw { .. } => &[],
        }
    }
}

/// A complete study guide: three artifacts for one document
#[derive(Debug, Clone)]
pub struct StudyGuide {
    /// Source document name, if known
    pub source: Option<String>,

    /// Difficulty the guide was generated at
    pub difficulty: Difficulty,

    /// Summary pass
    pub summary: GeneratedArtifact,

    /// Question and answer pass
    pub qa: GeneratedArtifact,

    /// Flashcard pass, unparsed
    pub flashcards_raw: GeneratedArtifact,

    /// Flashcard panel content
    pub flashcards: FlashcardPanel,
}

impl StudyGuide {
    /// Set the source document name
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The three generation passes, in generation order
    pub fn artifacts(&self) -> [&GeneratedArtifact; 3] {
        [&self.summary, &self.qa, &self.flashcards_raw]
    }

    /// Total failed chunk calls across all passes
    pub fn failure_count(&self) -> usize {
        self.artifacts().iter().map(|a| a.failures.len()).sum()
    }

    /// JSON document for machine-readable output
    pub fn to_json(&self) -> Value {
        let flashcards = match &self.flashcards {
            FlashcardPanel::Deck(deck) => json!({
                "parsed": true,
                "cards": deck
                    .iter()
                    .map(|c| json!({ "term": c.term, "definition": c.definition }))
                    .collect::<Vec<_>>(),
            }),
            FlashcardPanel::Raw { text } => json!({
                "parsed": false,
                "cards": [],
                "raw": text,
            }),
        };

        json!({
            "source": self.source,
            "difficulty": self.difficulty.as_str(),
            "chunks": self.summary.chunk_count,
            "summary": artifact_json(&self.summary),
            "qa": artifact_json(&self.qa),
            "flashcards": flashcards,
        })
    }
}

fn artifact_json(artifact: &GeneratedArtifact) -> Value {
    json!({
        "text": artifact.text,
        "failures": artifact.failures,
    })
}
