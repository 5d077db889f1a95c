//! Study Guide Generator
//!
//! Turns document text into study aids using an LLM.
//!
//! # Overview
//!
//! The document is split into paragraph-packed chunks. For each artifact
//! kind (summary, question/answer, flashcards) every chunk is sent to the
//! generation service with a difficulty-specific prompt, and the responses
//! are concatenated in chunk order. Flashcard output is then parsed into
//! term/definition records.
//!
//! # Architecture
//!
//! ```text
//! Text → Chunker → Prompt Catalog → LLM (per chunk) → Artifact text
//!                                                   ↘ Flashcard Parser → Deck
//! ```
//!
//! # Example Usage
//!
//! ```
//! use studyguide_domain::Difficulty;
//! use studyguide_generator::{FlashcardPanel, Generator, GeneratorConfig};
//! use studyguide_llm::MockProvider;
//!
//! let llm = MockProvider::new("Term: Photosynthesis\nDefinition: Light to sugar");
//! let generator = Generator::new(llm, GeneratorConfig::default()).unwrap();
//!
//! let guide = generator
//!     .study_guide("Plants make food from light.", Difficulty::Beginner, |_, _| {})
//!     .unwrap();
//!
//! assert_eq!(guide.summary.chunk_count, 1);
//! assert!(matches!(guide.flashcards, FlashcardPanel::Deck(ref d) if d.len() == 1));
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod types;


pub use chunking::{chunk_text, TextChunker};
pub use config::{GeneratorConfig, DEFAULT_CHUNK_SIZE, MIN_CHUNK_SIZE};
pub use error::GeneratorError;
pub use generator::{Generator, CHUNK_ERROR_PREFIX};
pub use parser::{parse_flashcards, strip_markup};
pub use prompt::{PromptCatalog, TEXT_PLACEHOLDER};
pub use types::{ChunkFailure, FlashcardPanel, GeneratedArtifact, Progress, StudyGuide};
