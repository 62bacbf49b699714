use crate::model::scores::{ScoreSet, round2};
use crate::model::thresholds::ScoringProfile;

/// Surface statistics every sub-score is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub word_count: usize,
    pub exclamations: usize,
    pub innovation_hits: usize,
    pub market_hits: usize,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub stats: TextStats,
    pub scores: ScoreSet,
}

pub fn run_stage2(text: &str, profile: &ScoringProfile) -> Stage2Output {
    let stats = collect_stats(text, profile);
    let scores = compute_scores(&stats, profile);
    Stage2Output { stats, scores }
}

pub fn collect_stats(text: &str, profile: &ScoringProfile) -> TextStats {
    let lower = text.to_lowercase();
    TextStats {
        word_count: text.split_whitespace().count(),
        exclamations: text.matches('!').count(),
        innovation_hits: count_keyword(&lower, profile.innovation_keyword),
        market_hits: count_keyword(&lower, profile.market_keyword),
    }
}

/// Non-overlapping substring occurrences.
pub fn count_keyword(haystack: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    haystack.matches(keyword).count()
}

pub fn compute_scores(stats: &TextStats, p: &ScoringProfile) -> ScoreSet {
    let words = to_u64(stats.word_count);
    let ceiling = p.score_ceiling;

    let clarity = capped(
        u64::from(p.clarity_base) + words / u64::from(p.clarity_words_per_point),
        ceiling,
    );
    let impact = capped(
        u64::from(p.impact_base)
            + to_u64(stats.exclamations).saturating_mul(u64::from(p.impact_per_exclamation))
            + words / u64::from(p.impact_words_per_point),
        ceiling,
    );
    let logic = capped(
        u64::from(p.logic_base) + words / u64::from(p.logic_words_per_point),
        ceiling,
    );
    let innovation = capped(
        u64::from(p.innovation_base)
            + to_u64(stats.innovation_hits).saturating_mul(u64::from(p.innovation_per_keyword)),
        ceiling,
    );
    let market = capped(
        u64::from(p.market_base)
            + to_u64(stats.market_hits).saturating_mul(u64::from(p.market_per_keyword)),
        ceiling,
    );

    let mut scores = ScoreSet {
        clarity,
        impact,
        logic,
        innovation,
        market,
        overall: 0.0,
    };
    scores.overall = overall_score(&scores, p);
    scores
}

/// Weighted sum of the five sub-scores, rounded to two decimals.
pub fn overall_score(s: &ScoreSet, p: &ScoringProfile) -> f64 {
    round2(
        f64::from(s.clarity) * p.w_clarity
            + f64::from(s.impact) * p.w_impact
            + f64::from(s.logic) * p.w_logic
            + f64::from(s.innovation) * p.w_innovation
            + f64::from(s.market) * p.w_market,
    )
}

fn capped(raw: u64, ceiling: u32) -> u32 {
    raw.min(u64::from(ceiling)) as u32
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
