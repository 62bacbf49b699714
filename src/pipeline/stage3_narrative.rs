use crate::model::narrative::Narrative;
use crate::model::scores::ScoreSet;
use crate::model::thresholds::ScoringProfile;
use crate::report::text::render_report_text;

#[derive(Debug)]
pub struct Stage3Output {
    pub narrative: Narrative,
    pub report_text: String,
}

pub fn run_stage3(word_count: usize, scores: &ScoreSet, profile: &ScoringProfile) -> Stage3Output {
    let narrative = build_narrative(scores, profile);
    let report_text = render_report_text(word_count, scores.overall, &narrative);
    Stage3Output {
        narrative,
        report_text,
    }
}

pub fn build_narrative(scores: &ScoreSet, profile: &ScoringProfile) -> Narrative {
    let threshold = profile.strength_threshold;
    let mut out = Narrative::default();

    if scores.clarity > threshold {
        out.strengths.push("Clear explanation of idea.");
    } else {
        out.weaknesses.push("Pitch clarity needs improvement.");
        out.suggestions.push("Simplify sentences and avoid jargon.");
    }

    if scores.impact > threshold {
        out.strengths.push("Strong persuasive tone.");
    } else {
        out.weaknesses.push("Lacks emotional or persuasive impact.");
        out.suggestions.push("Highlight strong problem and solution impact.");
    }

    // Low innovation only earns a suggestion, never a listed weakness.
    if scores.innovation > threshold {
        out.strengths.push("Innovative concept.");
    } else {
        out.suggestions.push("Emphasize uniqueness and differentiation.");
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_narrative.rs"]
mod tests;
