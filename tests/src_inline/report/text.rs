use super::*;

#[test]
fn test_report_layout_with_fillers() {
    let text = render_report_text(12, 62.25, &Narrative::default());
    let expected = "\nWord Count: 12\n\nOverall Score: 62.25\n\n\
Strengths:\n- Needs development\n\n\
Weaknesses:\n- Minor weaknesses\n\n\
Suggestions:\n- Great job! Ready for investors.\n";
    assert_eq!(text, expected);
}

#[test]
fn test_report_joins_multiple_items() {
    let narrative = Narrative {
        strengths: vec!["Clear explanation of idea.", "Strong persuasive tone."],
        weaknesses: vec![],
        suggestions: vec!["Emphasize uniqueness and differentiation."],
    };
    let text = render_report_text(300, 100.0, &narrative);
    assert!(text.contains("Overall Score: 100.0\n"));
    assert!(text.contains("Strengths:\n- Clear explanation of idea.\n- Strong persuasive tone.\n\n"));
    assert!(text.contains("Weaknesses:\n- Minor weaknesses\n"));
    assert!(text.ends_with("Suggestions:\n- Emphasize uniqueness and differentiation.\n"));
}
