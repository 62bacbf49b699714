use super::*;

fn sample_scores() -> ScoreSet {
    ScoreSet {
        clarity: 62,
        impact: 50,
        logic: 53,
        innovation: 100,
        market: 50,
        overall: 61.1,
    }
}

#[test]
fn test_score_table_rows() {
    let rows = score_table_rows(&sample_scores());
    let labels = rows.iter().map(|r| r[0].as_str()).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "Metric",
            "Clarity",
            "Impact",
            "Logic",
            "Innovation",
            "Market Potential",
            "Overall"
        ]
    );
    assert_eq!(rows[0][1], "Score");
    assert_eq!(rows[4][1], "100");
    assert_eq!(rows[6][1], "61.1");
}

#[test]
fn test_wrap_line_keeps_words_intact() {
    let lines = wrap_line("alpha beta gamma delta", 11);
    assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    assert_eq!(wrap_line("", 10), vec![String::new()]);
    assert_eq!(wrap_line("supercalifragilistic", 5), vec!["supercalifragilistic"]);
}

#[test]
fn test_paragraph_lines_preserve_breaks() {
    let lines = paragraph_lines("\nWord Count: 3\n\nOverall Score: 50.0\n");
    assert_eq!(
        lines,
        vec!["", "Word Count: 3", "", "Overall Score: 50.0", ""]
    );
}

#[test]
fn test_write_pdf_report_produces_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Pitch_Report.pdf");
    let scores = sample_scores();
    write_pdf_report(
        &path,
        &PdfReport {
            scores: &scores,
            timestamp: "2026-01-01 12:00:00.000000",
            report_text: "\nWord Count: 60\n\nOverall Score: 61.1\n",
        },
    )
    .unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_write_pdf_report_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("Pitch_Report.pdf");
    let scores = sample_scores();
    let err = write_pdf_report(
        &path,
        &PdfReport {
            scores: &scores,
            timestamp: "now",
            report_text: "",
        },
    )
    .unwrap_err();
    assert!(matches!(err, PitchError::Io { .. }));
}
