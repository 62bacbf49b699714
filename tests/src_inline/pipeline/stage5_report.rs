use super::*;

fn fixture() -> (TextStats, ScoreSet, Narrative) {
    (
        TextStats {
            word_count: 60,
            exclamations: 0,
            innovation_hits: 60,
            market_hits: 0,
        },
        ScoreSet {
            clarity: 62,
            impact: 50,
            logic: 53,
            innovation: 100,
            market: 50,
            overall: 61.1,
        },
        Narrative {
            strengths: vec!["Innovative concept."],
            weaknesses: vec![],
            suggestions: vec![],
        },
    )
}

#[test]
fn test_write_reports_pdf_only() {
    let dir = tempfile::tempdir().unwrap();
    let (stats, scores, narrative) = fixture();
    let input = Stage5Input {
        stats: &stats,
        scores: &scores,
        narrative: &narrative,
        report_text: "\nWord Count: 60\n",
        bar_chart: Path::new("bar_chart.png"),
        radar_chart: Path::new("radar_chart.png"),
        timestamp: "2026-01-01 00:00:00.000000",
        write_summary: false,
    };
    let out = write_reports(&input, dir.path()).unwrap();
    assert_eq!(out.pdf, dir.path().join(PDF_FILE));
    assert!(out.pdf.is_file());
    assert!(!dir.path().join(SUMMARY_FILE).exists());
    assert!(!dir.path().join(REPORT_TEXT_FILE).exists());
}

#[test]
fn test_write_reports_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let (stats, scores, narrative) = fixture();
    let input = Stage5Input {
        stats: &stats,
        scores: &scores,
        narrative: &narrative,
        report_text: "\nWord Count: 60\n",
        bar_chart: Path::new("bar_chart.png"),
        radar_chart: Path::new("radar_chart.png"),
        timestamp: "2026-01-01 00:00:00.000000",
        write_summary: true,
    };
    write_reports(&input, dir.path()).unwrap();

    let json = std::fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "pitchqc");
    assert_eq!(value["input"]["word_count"], 60);
    assert_eq!(value["scores"]["innovation"], 100);
    assert_eq!(value["scores"]["overall"], 61.1);
    assert_eq!(value["narrative"]["strengths"][0], "Innovative concept.");
    assert_eq!(value["generated_at"], "2026-01-01 00:00:00.000000");

    let text = std::fs::read_to_string(dir.path().join(REPORT_TEXT_FILE)).unwrap();
    assert_eq!(text, "\nWord Count: 60\n");
}
