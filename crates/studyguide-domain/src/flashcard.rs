//! Flashcard module - parsed term/definition records

/// A single flashcard: a term on the front and its definition on the back
///
/// Both fields are guaranteed non-empty when built through [`Flashcard::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flashcard {
    /// Front face text
    pub term: String,

    /// Back face text
    pub definition: String,
}

/// Errors raised when building a flashcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashcardError {
    /// The term was empty or whitespace
    EmptyTerm,

    /// The definition was empty or whitespace
    EmptyDefinition,
}

impl std::fmt::Display for FlashcardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlashcardError::EmptyTerm => f.write_str("flashcard term is empty"),
            FlashcardError::EmptyDefinition => f.write_str("flashcard definition is empty"),
        }
    }
}

impl std::error::Error for FlashcardError {}

impl Flashcard {
    /// Create a flashcard, rejecting blank fields
    ///
    /// # Examples
    ///
    /// ```
    /// use studyguide_domain::Flashcard;
    ///
    /// let card = Flashcard::new("Mitosis", "Cell division into two identical cells").unwrap();
    /// assert_eq!(card.term, "Mitosis");
    /// assert!(Flashcard::new("", "orphan").is_err());
    /// ```
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, FlashcardError> {
        let term = term.into();
        let definition = definition.into();

        if term.trim().is_empty() {
            return Err(FlashcardError::EmptyTerm);
        }
        if definition.trim().is_empty() {
            return Err(FlashcardError::EmptyDefinition);
        }

        Ok(Self { term, definition })
    }
}
