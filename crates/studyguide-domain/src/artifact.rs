//! Artifact kinds produced by a generation pass

/// The type of study aid being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Narrative summary of the document
    Summary,

    /// Question and answer pairs
    Qa,

    /// Term/definition flashcards
    Flashcards,
}

impl ArtifactKind {
    /// All kinds, in the order a study guide generates them
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Summary,
        ArtifactKind::Qa,
        ArtifactKind::Flashcards,
    ];

    /// Machine name ("summary", "qa", "flashcards")
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "summary",
            ArtifactKind::Qa => "qa",
            ArtifactKind::Flashcards => "flashcards",
        }
    }

    /// Panel title shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "Key Summaries",
            ArtifactKind::Qa => "Question & Answer",
            ArtifactKind::Flashcards => "Flashcards",
        }
    }

    /// Parse a kind from its machine name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Some(ArtifactKind::Summary),
            "qa" | "q&a" => Some(ArtifactKind::Qa),
            "flashcards" => Some(ArtifactKind::Flashcards),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid artifact kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_through_names() {
        for kind in ArtifactKind::ALL {
            assert_eq!(ArtifactKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(
            ArtifactKind::ALL,
            [ArtifactKind::Summary, ArtifactKind::Qa, ArtifactKind::Flashcards]
        );
    }
}
