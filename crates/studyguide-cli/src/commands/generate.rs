//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::config::{missing_credential, Config, OutputFormat, API_KEY_ENV};
use crate::error::{CliError, Result};
use crate::html;
use crate::output::Formatter;
use crate::progress::GenerationProgress;
use crate::viewer;
use std::fmt::Display;
use std::io::IsTerminal;
use std::path::Path;
use studyguide_domain::traits::LlmProvider;
use studyguide_domain::Difficulty;
use studyguide_generator::{FlashcardPanel, Generator, GeneratorConfig, StudyGuide};
use studyguide_llm::{Provider, ProviderSettings};
use tracing::info;

/// Everything `generate` needs, resolved from flags and configuration.
#[derive(Debug)]
pub struct GenerateRequest {
    /// Difficulty for every prompt
    pub difficulty: Difficulty,
    /// Chunking configuration
    pub generator: GeneratorConfig,
    /// Generation service settings with the credential applied
    pub provider: ProviderSettings,
}

/// Resolve flags, configuration and credential.
///
/// Fails on any configuration problem, including a missing API key, so no
/// file is read before the setup is known to be usable.
pub fn resolve_request(
    args: &GenerateArgs,
    config: &Config,
    env_key: Option<String>,
) -> Result<GenerateRequest> {
    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty.into(),
        None => config.generation.difficulty()?,
    };

    let generator = config.generator_config(args.chunk_size);
    generator.validate()?;

    let provider = config.provider_settings(env_key);
    if missing_credential(&provider) {
        return Err(CliError::Config(format!(
            "Google API key not found. Set {} in the environment or a .env file.",
            API_KEY_ENV
        )));
    }

    Ok(GenerateRequest {
        difficulty,
        generator,
        provider,
    })
}

/// Extract `path` and run all three generation passes over it.
pub fn build_guide<L>(
    generator: &Generator<L>,
    path: &Path,
    difficulty: Difficulty,
    formatter: &Formatter,
) -> Result<StudyGuide>
where
    L: LlmProvider,
    L::Error: Display,
{
    let document = studyguide_document::load_file(path)?;
    let pretty = formatter.format() == OutputFormat::Pretty;

    let chunk_count = generator.chunk(&document.text).len();
    if pretty {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Read {} ({} characters), {} chunks, model {}",
                document.filename,
                document.char_count(),
                chunk_count,
                generator.provider().model_name()
            ))
        );
    }

    let progress = GenerationProgress::new(chunk_count, pretty);
    let guide = generator.study_guide(&document.text, difficulty, |kind, p| {
        progress.update(kind, p)
    });
    progress.clear();

    Ok(guide?.with_source(document.filename))
}

/// Execute the generate command.
pub fn execute_generate(
    args: GenerateArgs,
    config: &Config,
    env_key: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    let request = resolve_request(&args, config, env_key)?;
    info!(
        "Generating {} study guide with {} provider",
        request.difficulty.as_str(),
        request.provider.kind.as_str()
    );

    let provider = Provider::from_settings(&request.provider)?;
    let generator = Generator::new(provider, request.generator)?;
    let guide = build_guide(&generator, &args.file, request.difficulty, formatter)?;

    let interactive = formatter.format() == OutputFormat::Pretty
        && !args.no_interactive
        && std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal();

    if guide.failure_count() > 0 && formatter.format() == OutputFormat::Pretty {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} chunk request(s) failed; their errors are shown inline",
                guide.failure_count()
            ))
        );
    }

    println!("{}", formatter.format_guide(&guide, !interactive)?);

    if let Some(path) = &args.html {
        html::write(&guide, path)?;
        eprintln!(
            "{}",
            formatter.success(&format!("Wrote HTML study guide to {}", path.display()))
        );
    }

    if interactive {
        if let FlashcardPanel::Deck(deck) = &guide.flashcards {
            viewer::run_viewer(deck.clone(), formatter)?;
        }
    }

    Ok(())
}
