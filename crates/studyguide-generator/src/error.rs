//! Error types for the Generator

use thiserror::Error;

/// Errors that stop a study guide from being produced
///
/// Per-chunk generation failures are not errors at this level; they are
/// recorded inline in the artifact text and reported in
/// [`GeneratedArtifact::failures`](crate::GeneratedArtifact::failures).
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The document contains no usable text
    #[error("Document contains no text to study")]
    EmptyDocument,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
