use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PitchError;
use crate::model::narrative::Narrative;
use crate::model::outcome::ArtifactPaths;
use crate::model::scores::ScoreSet;
use crate::pipeline::stage2_scores::TextStats;
use crate::report::json::{SummaryData, render_summary_json};
use crate::report::pdf::{PdfReport, write_pdf_report};

pub const PDF_FILE: &str = "Pitch_Report.pdf";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_TEXT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub stats: &'a TextStats,
    pub scores: &'a ScoreSet,
    pub narrative: &'a Narrative,
    pub report_text: &'a str,
    pub bar_chart: &'a Path,
    pub radar_chart: &'a Path,
    pub timestamp: &'a str,
    pub write_summary: bool,
}

#[derive(Debug)]
pub struct Stage5Output {
    pub pdf: PathBuf,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<Stage5Output, PitchError> {
    let pdf = out_dir.join(PDF_FILE);
    write_pdf_report(
        &pdf,
        &PdfReport {
            scores: input.scores,
            timestamp: input.timestamp,
            report_text: input.report_text,
        },
    )?;
    tracing::debug!(path = %pdf.display(), "PDF report written");

    if input.write_summary {
        let artifacts = ArtifactPaths {
            bar_chart: input.bar_chart.to_path_buf(),
            radar_chart: input.radar_chart.to_path_buf(),
            pdf: pdf.clone(),
        };
        let summary = SummaryData {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            generated_at: input.timestamp,
            input: input.stats.into(),
            scores: input.scores,
            narrative: input.narrative,
            artifacts: &artifacts,
        };
        write_text(&out_dir.join(SUMMARY_FILE), &render_summary_json(&summary)?)?;
        write_text(&out_dir.join(REPORT_TEXT_FILE), input.report_text)?;
    }

    Ok(Stage5Output { pdf })
}

fn write_text(path: &Path, contents: &str) -> Result<(), PitchError> {
    let ctx = || format!("writing {}", path.display());
    let mut w = BufWriter::new(File::create(path).map_err(|e| PitchError::io(ctx(), e))?);
    w.write_all(contents.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| PitchError::io(ctx(), e))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
