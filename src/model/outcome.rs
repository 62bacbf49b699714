use std::path::PathBuf;

use serde::Serialize;

use crate::model::narrative::Narrative;
use crate::model::scores::ScoreSet;

pub const SHORT_INPUT_MESSAGE: &str = "⚠ Please enter at least 50 characters.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactPaths {
    pub bar_chart: PathBuf,
    pub radar_chart: PathBuf,
    pub pdf: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub word_count: usize,
    pub scores: ScoreSet,
    pub narrative: Narrative,
    pub report_text: String,
    pub artifacts: ArtifactPaths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    InputTooShort,
    Failed(String),
}

impl DegradedReason {
    pub fn message(&self) -> String {
        match self {
            DegradedReason::InputTooShort => SHORT_INPUT_MESSAGE.to_string(),
            DegradedReason::Failed(err) => format!("Error occurred: {err}"),
        }
    }
}

/// Result of one analysis. Both variants are successful returns; `Degraded`
/// carries zeroed scores and no artifacts.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Scored(ScoreReport),
    Degraded(DegradedReason),
}

impl AnalysisOutcome {
    pub fn view(&self) -> AnalysisView {
        match self {
            AnalysisOutcome::Scored(report) => AnalysisView {
                overall: report.scores.overall,
                clarity: report.scores.clarity,
                impact: report.scores.impact,
                logic: report.scores.logic,
                innovation: report.scores.innovation,
                bar_chart: Some(report.artifacts.bar_chart.clone()),
                radar_chart: Some(report.artifacts.radar_chart.clone()),
                report_text: report.report_text.clone(),
                pdf: Some(report.artifacts.pdf.clone()),
            },
            AnalysisOutcome::Degraded(reason) => AnalysisView {
                overall: 0.0,
                clarity: 0,
                impact: 0,
                logic: 0,
                innovation: 0,
                bar_chart: None,
                radar_chart: None,
                report_text: reason.message(),
                pdf: None,
            },
        }
    }
}

/// The nine values bound to the display surface, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub overall: f64,
    pub clarity: u32,
    pub impact: u32,
    pub logic: u32,
    pub innovation: u32,
    pub bar_chart: Option<PathBuf>,
    pub radar_chart: Option<PathBuf>,
    pub report_text: String,
    pub pdf: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetView {
    pub text: String,
    pub overall: f64,
    pub clarity: u32,
    pub impact: u32,
    pub logic: u32,
    pub innovation: u32,
    pub bar_chart: Option<PathBuf>,
    pub radar_chart: Option<PathBuf>,
    pub report_text: String,
    pub pdf: Option<PathBuf>,
}

pub fn reset() -> ResetView {
    ResetView {
        text: String::new(),
        overall: 0.0,
        clarity: 0,
        impact: 0,
        logic: 0,
        innovation: 0,
        bar_chart: None,
        radar_chart: None,
        report_text: String::new(),
        pdf: None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/outcome.rs"]
mod tests;
