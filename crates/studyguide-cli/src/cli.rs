//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studyguide_domain::{ArtifactKind, Difficulty};

/// Study Guide - Turn a document into summaries, Q&A and flashcards.
#[derive(Debug, Parser)]
#[command(name = "studyguide")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Panels, tables and the interactive viewer (default)
    Pretty,
    /// The whole study guide as JSON
    Json,
    /// Raw generated text only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a study guide from a PDF, TXT or CSV file
    Generate(GenerateArgs),

    /// Show the prompt templates
    Prompts(PromptsArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Document to study (.pdf, .txt or .csv)
    pub file: PathBuf,

    /// Difficulty level (defaults to the configured level)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Chunk budget in characters (defaults to the configured size)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Also write a standalone HTML study guide to this path
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Print the deck instead of opening the interactive flashcard viewer
    #[arg(long)]
    pub no_interactive: bool,
}

/// Arguments for the prompts command.
#[derive(Debug, Parser)]
pub struct PromptsArgs {
    /// Only this artifact kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Only this difficulty level
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Difficulty argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DifficultyArg {
    /// Plain language, basic facts
    Beginner,
    /// Key arguments and relationships
    Intermediate,
    /// Critical, graduate-level treatment
    Advanced,
}

/// Artifact kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Narrative summary
    Summary,
    /// Question and answer pairs
    Qa,
    /// Term/definition flashcards
    Flashcards,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Pretty => crate::config::OutputFormat::Pretty,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

impl From<KindArg> for ArtifactKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Summary => ArtifactKind::Summary,
            KindArg::Qa => ArtifactKind::Qa,
            KindArg::Flashcards => ArtifactKind::Flashcards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_command() {
        let cli = Cli::parse_from([
            "studyguide",
            "generate",
            "notes.pdf",
            "--difficulty",
            "advanced",
            "--html",
            "out.html",
        ]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.file, PathBuf::from("notes.pdf"));
                assert_eq!(args.difficulty, Some(DifficultyArg::Advanced));
                assert_eq!(args.html, Some(PathBuf::from("out.html")));
                assert!(args.chunk_size.is_none());
                assert!(!args.no_interactive);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "studyguide",
            "prompts",
            "--format",
            "json",
            "-vv",
            "--no-color",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        let result = Cli::try_parse_from(["studyguide", "generate", "a.txt", "-d", "expert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["studyguide", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }

    #[test]
    fn test_arg_conversions() {
        let difficulty: Difficulty = DifficultyArg::Intermediate.into();
        assert_eq!(difficulty, Difficulty::Intermediate);
        let kind: ArtifactKind = KindArg::Qa.into();
        assert_eq!(kind, ArtifactKind::Qa);
    }
}
