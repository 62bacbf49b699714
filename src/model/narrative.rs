use serde::Serialize;

pub const NO_STRENGTHS: &str = "Needs development";
pub const NO_WEAKNESSES: &str = "Minor weaknesses";
pub const NO_SUGGESTIONS: &str = "Great job! Ready for investors.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub suggestions: Vec<&'static str>,
}

impl Narrative {
    pub fn strengths_or_filler(&self) -> Vec<&'static str> {
        or_filler(&self.strengths, NO_STRENGTHS)
    }

    pub fn weaknesses_or_filler(&self) -> Vec<&'static str> {
        or_filler(&self.weaknesses, NO_WEAKNESSES)
    }

    pub fn suggestions_or_filler(&self) -> Vec<&'static str> {
        or_filler(&self.suggestions, NO_SUGGESTIONS)
    }
}

fn or_filler(items: &[&'static str], filler: &'static str) -> Vec<&'static str> {
    if items.is_empty() {
        vec![filler]
    } else {
        items.to_vec()
    }
}
