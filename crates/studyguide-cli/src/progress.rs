//! Progress bars for generation passes.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::io::IsTerminal;
use studyguide_domain::ArtifactKind;
use studyguide_generator::Progress;

/// Bar style for one artifact pass.
fn artifact_style(label: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(&format!(
            "  {:<18} [{{bar:30.green/white}}] {{pos}}/{{len}} chunks {{msg}}",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

/// One progress bar per artifact kind, drawn to stderr.
///
/// Bars are hidden when stderr is not a terminal or when `enabled` is false,
/// so piped and JSON output stay clean.
pub struct GenerationProgress {
    multi: MultiProgress,
    bars: HashMap<ArtifactKind, ProgressBar>,
}

impl GenerationProgress {
    /// Create bars for every artifact kind, each `chunks` long.
    pub fn new(chunks: usize, enabled: bool) -> Self {
        let multi = MultiProgress::new();
        if !enabled || !std::io::stderr().is_terminal() {
            multi.set_draw_target(ProgressDrawTarget::hidden());
        }

        let bars = ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let pb = multi.add(ProgressBar::new(chunks as u64));
                pb.set_style(artifact_style(kind.title()));
                (kind, pb)
            })
            .collect();

        Self { multi, bars }
    }

    /// Apply a progress report from the generator.
    pub fn update(&self, kind: ArtifactKind, progress: Progress) {
        if let Some(pb) = self.bars.get(&kind) {
            pb.set_length(progress.total as u64);
            pb.set_position(progress.completed as u64);
            if progress.is_done() {
                pb.finish_with_message("done");
            }
        }
    }

    /// Remove all bars from the terminal.
    pub fn clear(&self) {
        for pb in self.bars.values() {
            pb.finish_and_clear();
        }
        self.multi.clear().ok();
    }
}
