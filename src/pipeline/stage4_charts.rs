use std::path::{Path, PathBuf};

use crate::charts::bar::render_bar_chart;
use crate::charts::radar::render_radar_chart;
use crate::error::PitchError;
use crate::model::scores::ScoreSet;

pub const BAR_CHART_FILE: &str = "bar_chart.png";
pub const RADAR_CHART_FILE: &str = "radar_chart.png";

#[derive(Debug)]
pub struct Stage4Output {
    pub bar_chart: PathBuf,
    pub radar_chart: PathBuf,
}

pub fn run_stage4(out_dir: &Path, scores: &ScoreSet) -> Result<Stage4Output, PitchError> {
    let bar_chart = out_dir.join(BAR_CHART_FILE);
    render_bar_chart(&bar_chart, scores)?;
    tracing::debug!(path = %bar_chart.display(), "bar chart written");

    let radar_chart = out_dir.join(RADAR_CHART_FILE);
    render_radar_chart(&radar_chart, scores)?;
    tracing::debug!(path = %radar_chart.display(), "radar chart written");

    Ok(Stage4Output {
        bar_chart,
        radar_chart,
    })
}
