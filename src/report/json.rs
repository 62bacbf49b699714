use serde::Serialize;

use crate::error::PitchError;
use crate::model::narrative::Narrative;
use crate::model::outcome::ArtifactPaths;
use crate::model::scores::ScoreSet;
use crate::pipeline::stage2_scores::TextStats;

#[derive(Debug, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated_at: &'a str,
    pub input: InputSummary,
    pub scores: &'a ScoreSet,
    pub narrative: &'a Narrative,
    pub artifacts: &'a ArtifactPaths,
}

#[derive(Debug, Serialize)]
pub struct InputSummary {
    pub word_count: usize,
    pub exclamations: usize,
    pub innovation_hits: usize,
    pub market_hits: usize,
}

impl From<&TextStats> for InputSummary {
    fn from(stats: &TextStats) -> Self {
        Self {
            word_count: stats.word_count,
            exclamations: stats.exclamations,
            innovation_hits: stats.innovation_hits,
            market_hits: stats.market_hits,
        }
    }
}

pub fn render_summary_json(data: &SummaryData<'_>) -> Result<String, PitchError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
