#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub min_chars: usize,

    pub clarity_base: u32,
    pub clarity_words_per_point: u32,
    pub impact_base: u32,
    pub impact_per_exclamation: u32,
    pub impact_words_per_point: u32,
    pub logic_base: u32,
    pub logic_words_per_point: u32,
    pub innovation_base: u32,
    pub innovation_per_keyword: u32,
    pub innovation_keyword: &'static str,
    pub market_base: u32,
    pub market_per_keyword: u32,
    pub market_keyword: &'static str,
    pub score_ceiling: u32,

    pub w_clarity: f64,
    pub w_impact: f64,
    pub w_logic: f64,
    pub w_innovation: f64,
    pub w_market: f64,

    pub strength_threshold: u32,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            min_chars: 50,

            clarity_base: 50,
            clarity_words_per_point: 5,
            impact_base: 40,
            impact_per_exclamation: 5,
            impact_words_per_point: 6,
            logic_base: 45,
            logic_words_per_point: 7,
            innovation_base: 40,
            innovation_per_keyword: 10,
            innovation_keyword: "ai",
            market_base: 50,
            market_per_keyword: 8,
            market_keyword: "market",
            score_ceiling: 100,

            w_clarity: 0.25,
            w_impact: 0.25,
            w_logic: 0.20,
            w_innovation: 0.15,
            w_market: 0.15,

            strength_threshold: 70,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
