//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-generation services
///
/// Implemented by the infrastructure layer (studyguide-llm). Calls are
/// synchronous: one prompt in, one response out, or an error whose
/// `Display` output is shown to the user.
pub trait LlmProvider {
    /// Error type for generation calls
    type Error;

    /// Generate a completion for a single prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Short model identifier for logs and reports
    fn model_name(&self) -> &str {
        "llm"
    }
}
