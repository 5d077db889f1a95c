//! Study Guide Domain Layer
//!
//! Core vocabulary shared by every other crate in the workspace. It has no
//! external dependencies and defines the value types, the flashcard viewer
//! state machine, and the trait boundary to the text-generation service.
//!
//! ## Key Concepts
//!
//! - **Difficulty**: audience level selecting a prompt variant
//! - **ArtifactKind**: the study aid being generated (summary, Q&A, flashcards)
//! - **Flashcard**: a parsed `(term, definition)` pair; a sequence of them is a deck
//! - **FlashcardViewer**: one-card-at-a-time navigation with reveal toggling
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations (HTTP providers, extractors) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod difficulty;
pub mod flashcard;
pub mod traits;
pub mod viewer;

// Re-exports for convenience
pub use artifact::ArtifactKind;
pub use difficulty::Difficulty;
pub use flashcard::{Flashcard, FlashcardError};
pub use viewer::{CardFace, FlashcardViewer};
