//! Prompts command implementation.

use crate::cli::PromptsArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use serde_json::json;
use studyguide_domain::{ArtifactKind, Difficulty};
use studyguide_generator::PromptCatalog;

/// Catalog entries matching the optional filters.
pub fn select_prompts(
    kind: Option<ArtifactKind>,
    difficulty: Option<Difficulty>,
) -> Vec<(ArtifactKind, Difficulty, &'static str)> {
    PromptCatalog::entries()
        .filter(|(k, _, _)| kind.map_or(true, |want| *k == want))
        .filter(|(_, d, _)| difficulty.map_or(true, |want| *d == want))
        .collect()
}

/// Execute the prompts command.
pub fn execute_prompts(args: PromptsArgs, formatter: &Formatter) -> Result<()> {
    let entries = select_prompts(args.kind.map(Into::into), args.difficulty.map(Into::into));

    if formatter.format() == OutputFormat::Json {
        let value: Vec<_> = entries
            .iter()
            .map(|(kind, difficulty, template)| {
                json!({
                    "kind": kind.as_str(),
                    "difficulty": difficulty.as_str(),
                    "template": template,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for (kind, difficulty, template) in entries {
        println!("{}", formatter.prompt_entry(kind, difficulty, template));
    }

    Ok(())
}
