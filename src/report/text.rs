use crate::model::narrative::Narrative;
use crate::model::scores::format_overall;

/// Renders the narrative block shown to the user and embedded in the PDF.
pub fn render_report_text(word_count: usize, overall: f64, narrative: &Narrative) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("Word Count: {}\n\n", word_count));
    out.push_str(&format!("Overall Score: {}\n\n", format_overall(overall)));

    push_section(&mut out, "Strengths", &narrative.strengths_or_filler());
    out.push('\n');
    push_section(&mut out, "Weaknesses", &narrative.weaknesses_or_filler());
    out.push('\n');
    push_section(&mut out, "Suggestions", &narrative.suggestions_or_filler());

    out
}

fn push_section(out: &mut String, title: &str, items: &[&str]) {
    out.push_str(&format!("{title}:\n"));
    out.push_str(&format!("- {}\n", items.join("\n- ")));
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
