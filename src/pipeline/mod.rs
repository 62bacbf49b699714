use std::panic::{self, AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::PitchError;
use crate::model::outcome::{AnalysisOutcome, ArtifactPaths, DegradedReason, ScoreReport};
use crate::model::thresholds::ScoringProfile;
use crate::report::local_timestamp;

pub mod stage1_validate;
pub mod stage2_scores;
pub mod stage3_narrative;
pub mod stage4_charts;
pub mod stage5_report;

use stage1_validate::{Stage1Output, run_stage1};
use stage2_scores::run_stage2;
use stage3_narrative::run_stage3;
use stage4_charts::run_stage4;
use stage5_report::{Stage5Input, write_reports};

static RUN_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactLayout {
    /// Fixed file names directly in the output directory; each run overwrites the last.
    Shared,
    /// Fixed file names inside a fresh `run-*` subdirectory per analysis.
    PerRun,
}

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub out_dir: PathBuf,
    pub layout: ArtifactLayout,
    pub write_summary: bool,
    pub profile: ScoringProfile,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            layout: ArtifactLayout::Shared,
            write_summary: false,
            profile: ScoringProfile::default_v1(),
        }
    }
}

/// The current directory resolves to an empty base so artifact paths stay
/// bare relative names (`bar_chart.png`, not `./bar_chart.png`).
pub fn resolve_output_dir(base: &Path, layout: ArtifactLayout) -> PathBuf {
    let base = if base == Path::new(".") {
        PathBuf::new()
    } else {
        base.to_path_buf()
    };
    match layout {
        ArtifactLayout::Shared => base,
        ArtifactLayout::PerRun => base.join(run_dir_name()),
    }
}

fn run_dir_name() -> String {
    format!(
        "run-{}-{}-{}",
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        std::process::id(),
        RUN_COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Scores a pitch and writes its charts and PDF. Never fails: short input and
/// any rendering or I/O error come back as `AnalysisOutcome::Degraded`.
pub fn analyze(text: &str, options: &AnalyzeOptions) -> AnalysisOutcome {
    match run_stage1(text, &options.profile) {
        Stage1Output::TooShort { trimmed_chars } => {
            tracing::warn!(
                trimmed_chars,
                min_chars = options.profile.min_chars,
                "pitch too short; returning zeroed scores"
            );
            return AnalysisOutcome::Degraded(DegradedReason::InputTooShort);
        }
        Stage1Output::Accepted { trimmed_chars } => {
            tracing::info!(trimmed_chars, "pitch accepted");
        }
    }

    match run_guarded(|| score_and_render(text, options)) {
        Ok(Ok(report)) => {
            tracing::info!(
                overall = report.scores.overall,
                pdf = %report.artifacts.pdf.display(),
                "analysis complete"
            );
            AnalysisOutcome::Scored(report)
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "analysis degraded");
            AnalysisOutcome::Degraded(DegradedReason::Failed(err.to_string()))
        }
        Err(message) => {
            tracing::error!(error = %message, "analysis panicked");
            AnalysisOutcome::Degraded(DegradedReason::Failed(message))
        }
    }
}

fn score_and_render(text: &str, options: &AnalyzeOptions) -> Result<ScoreReport, PitchError> {
    let profile = &options.profile;

    let stage2 = run_stage2(text, profile);
    tracing::debug!(
        word_count = stage2.stats.word_count,
        exclamations = stage2.stats.exclamations,
        innovation_hits = stage2.stats.innovation_hits,
        market_hits = stage2.stats.market_hits,
        "text statistics"
    );

    let stage3 = run_stage3(stage2.stats.word_count, &stage2.scores, profile);

    let out_dir = resolve_output_dir(&options.out_dir, options.layout);
    std::fs::create_dir_all(&out_dir)
        .map_err(|e| PitchError::io(format!("creating {}", out_dir.display()), e))?;

    let stage4 = run_stage4(&out_dir, &stage2.scores)?;

    let timestamp = local_timestamp();
    let stage5 = write_reports(
        &Stage5Input {
            stats: &stage2.stats,
            scores: &stage2.scores,
            narrative: &stage3.narrative,
            report_text: &stage3.report_text,
            bar_chart: &stage4.bar_chart,
            radar_chart: &stage4.radar_chart,
            timestamp: &timestamp,
            write_summary: options.write_summary,
        },
        &out_dir,
    )?;

    Ok(ScoreReport {
        word_count: stage2.stats.word_count,
        scores: stage2.scores,
        narrative: stage3.narrative,
        report_text: stage3.report_text,
        artifacts: ArtifactPaths {
            bar_chart: stage4.bar_chart,
            radar_chart: stage4.radar_chart,
            pdf: stage5.pdf,
        },
    })
}

/// Runs `f`, turning a panic into its message. The default hook is swapped
/// for a tracing event while `f` runs so nothing is printed to stderr.
fn run_guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic inside analysis");
    }));
    let result = catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic during analysis".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/analyze.rs"]
mod tests;
