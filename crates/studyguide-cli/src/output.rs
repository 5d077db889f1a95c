//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use studyguide_domain::{ArtifactKind, CardFace, Difficulty, Flashcard, FlashcardViewer};
use studyguide_generator::{FlashcardPanel, GeneratedArtifact, StudyGuide};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style, Width},
};

/// Widest a table cell may grow before wrapping.
const CELL_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a whole study guide.
    ///
    /// In pretty mode `include_deck` controls whether the flashcard panel
    /// lists the cards or only announces the interactive viewer.
    pub fn format_guide(&self, guide: &StudyGuide, include_deck: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&guide.to_json())?),
            OutputFormat::Quiet => Ok(self.format_guide_quiet(guide)),
            OutputFormat::Pretty => Ok(self.format_guide_pretty(guide, include_deck)),
        }
    }

    /// Raw generated text, one artifact after another.
    fn format_guide_quiet(&self, guide: &StudyGuide) -> String {
        guide
            .artifacts()
            .iter()
            .map(|a| a.text.as_str())
            .collect::<Vec<_>>()
            .concat()
    }

    fn format_guide_pretty(&self, guide: &StudyGuide, include_deck: bool) -> String {
        let mut out = String::new();

        out.push_str(&self.generation_report(guide));
        out.push_str("\n\n");

        out.push_str(&self.panel(ArtifactKind::Summary, &guide.summary.text));
        out.push('\n');
        out.push_str(&self.panel(ArtifactKind::Qa, &guide.qa.text));
        out.push('\n');

        out.push_str(&self.heading(ArtifactKind::Flashcards.title()));
        out.push('\n');
        match &guide.flashcards {
            FlashcardPanel::Deck(deck) if include_deck => {
                out.push_str(&self.deck_table(deck));
                out.push('\n');
            }
            FlashcardPanel::Deck(deck) => {
                out.push_str(&self.info(&format!("{} flashcards ready for review", deck.len())));
                out.push('\n');
            }
            FlashcardPanel::Raw { text } => {
                out.push_str(&self.warning(
                    "Could not parse flashcards from the generated text. Showing raw output.",
                ));
                out.push_str("\n\n");
                out.push_str(text.trim_end());
                out.push('\n');
            }
        }

        out
    }

    /// A titled text panel.
    pub fn panel(&self, kind: ArtifactKind, text: &str) -> String {
        format!("{}\n\n{}\n", self.heading(kind.title()), text.trim_end())
    }

    /// A section heading with an underline.
    pub fn heading(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count());
        if self.color_enabled {
            format!("{}\n{}", title.bold(), rule.dimmed())
        } else {
            format!("{}\n{}", title, rule)
        }
    }

    /// Per-artifact chunk outcome table.
    pub fn generation_report(&self, guide: &StudyGuide) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Artifact", "Chunks", "Succeeded", "Failed"]);

        for artifact in guide.artifacts() {
            builder.push_record([
                artifact.kind.title().to_string(),
                artifact.chunk_count.to_string(),
                artifact.succeeded().to_string(),
                self.failure_cell(artifact),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let source = guide.source.as_deref().unwrap_or("document");
        format!(
            "{}\n{}",
            self.success(&format!(
                "Study guide for {} ({})",
                source,
                guide.difficulty.label()
            )),
            table
        )
    }

    fn failure_cell(&self, artifact: &GeneratedArtifact) -> String {
        let failed = artifact.failures.len().to_string();
        if artifact.failures.is_empty() {
            failed
        } else {
            self.colorize(&failed, "red")
        }
    }

    /// Format a deck as a numbered table.
    pub fn deck_table(&self, deck: &[Flashcard]) -> String {
        if deck.is_empty() {
            return self.colorize("No flashcards.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Term", "Definition"]);

        for (i, card) in deck.iter().enumerate() {
            builder.push_record([(i + 1).to_string(), card.term.clone(), card.definition.clone()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Width::wrap(CELL_WIDTH * 2));

        table.to_string()
    }

    /// Render the viewer's current card with its counter and navigation hints.
    ///
    /// An empty deck renders nothing.
    pub fn card(&self, viewer: &FlashcardViewer) -> Option<String> {
        let card = viewer.current()?;
        let (position, total) = viewer.counter()?;

        let (label, text) = match viewer.face() {
            CardFace::Front => ("TERM", card.term.as_str()),
            CardFace::Back => ("DEFINITION", card.definition.as_str()),
        };

        let mut builder = Builder::default();
        builder.push_record([label.to_string()]);
        builder.push_record([text.to_string()]);
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(..)).with(Alignment::center()))
            .with(Width::wrap(CELL_WIDTH));

        let previous = self.nav_button("[p] Previous", viewer.can_previous());
        let next = self.nav_button("[n] Next", viewer.can_next());
        let counter = format!("{} / {}", position, total);

        Some(format!("{}\n{}   {}   {}", table, previous, counter, next))
    }

    fn nav_button(&self, label: &str, enabled: bool) -> String {
        match (enabled, self.color_enabled) {
            (true, true) => label.cyan().to_string(),
            (true, false) => label.to_string(),
            (false, true) => label.dimmed().to_string(),
            (false, false) => format!("({})", label),
        }
    }

    /// Format one prompt template entry.
    pub fn prompt_entry(
        &self,
        kind: ArtifactKind,
        difficulty: Difficulty,
        template: &str,
    ) -> String {
        match self.format {
            OutputFormat::Quiet => template.to_string(),
            _ => format!(
                "{}\n{}\n",
                self.heading(&format!("{} / {}", kind.title(), difficulty.label())),
                template
            ),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
