use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage1Output {
    Accepted { trimmed_chars: usize },
    TooShort { trimmed_chars: usize },
}

pub fn run_stage1(text: &str, profile: &ScoringProfile) -> Stage1Output {
    let trimmed_chars = text.trim().chars().count();
    if trimmed_chars < profile.min_chars {
        Stage1Output::TooShort { trimmed_chars }
    } else {
        Stage1Output::Accepted { trimmed_chars }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
