use super::*;
use crate::model::scores::ScoreSet;

fn scored() -> AnalysisOutcome {
    AnalysisOutcome::Scored(ScoreReport {
        word_count: 60,
        scores: ScoreSet {
            clarity: 62,
            impact: 50,
            logic: 53,
            innovation: 100,
            market: 50,
            overall: 61.1,
        },
        narrative: Narrative::default(),
        report_text: "report".to_string(),
        artifacts: ArtifactPaths {
            bar_chart: PathBuf::from("bar_chart.png"),
            radar_chart: PathBuf::from("radar_chart.png"),
            pdf: PathBuf::from("Pitch_Report.pdf"),
        },
    })
}

#[test]
fn test_scored_view_field_order_and_values() {
    let view = scored().view();
    assert_eq!(view.overall, 61.1);
    assert_eq!(
        [view.clarity, view.impact, view.logic, view.innovation],
        [62, 50, 53, 100]
    );
    assert_eq!(view.bar_chart, Some(PathBuf::from("bar_chart.png")));
    assert_eq!(view.radar_chart, Some(PathBuf::from("radar_chart.png")));
    assert_eq!(view.pdf, Some(PathBuf::from("Pitch_Report.pdf")));
    assert_eq!(view.report_text, "report");

    let json = serde_json::to_value(&view).unwrap();
    let keys = json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys.len(), 9);
}

#[test]
fn test_short_input_view_is_zeroed_with_warning() {
    let view = AnalysisOutcome::Degraded(DegradedReason::InputTooShort).view();
    assert_eq!(view.overall, 0.0);
    assert_eq!(
        [view.clarity, view.impact, view.logic, view.innovation],
        [0, 0, 0, 0]
    );
    assert!(view.bar_chart.is_none());
    assert!(view.radar_chart.is_none());
    assert!(view.pdf.is_none());
    assert_eq!(view.report_text, "⚠ Please enter at least 50 characters.");
}

#[test]
fn test_failure_view_embeds_error_text() {
    let reason = DegradedReason::Failed("disk full".to_string());
    let view = AnalysisOutcome::Degraded(reason).view();
    assert_eq!(view.report_text, "Error occurred: disk full");
    assert!(view.pdf.is_none());
}

#[test]
fn test_reset_clears_everything() {
    let view = reset();
    assert!(view.text.is_empty());
    assert!(view.report_text.is_empty());
    assert_eq!(view.overall, 0.0);
    assert_eq!(
        [view.clarity, view.impact, view.logic, view.innovation],
        [0, 0, 0, 0]
    );
    assert!(view.bar_chart.is_none() && view.radar_chart.is_none() && view.pdf.is_none());
}
