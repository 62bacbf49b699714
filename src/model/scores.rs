use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Clarity,
    Impact,
    Logic,
    Innovation,
    Market,
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::Clarity,
        Category::Impact,
        Category::Logic,
        Category::Innovation,
        Category::Market,
    ]
}

impl Category {
    /// Axis label used by both charts.
    pub fn chart_label(self) -> &'static str {
        match self {
            Category::Clarity => "Clarity",
            Category::Impact => "Impact",
            Category::Logic => "Logic",
            Category::Innovation => "Innovation",
            Category::Market => "Market",
        }
    }

    /// Row label used in the PDF score table.
    pub fn table_label(self) -> &'static str {
        match self {
            Category::Market => "Market Potential",
            other => other.chart_label(),
        }
    }
}

/// The five bounded sub-scores plus their weighted aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSet {
    pub clarity: u32,
    pub impact: u32,
    pub logic: u32,
    pub innovation: u32,
    pub market: u32,
    pub overall: f64,
}

impl ScoreSet {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Clarity => self.clarity,
            Category::Impact => self.impact,
            Category::Logic => self.logic,
            Category::Innovation => self.innovation,
            Category::Market => self.market,
        }
    }

    /// Sub-scores in `category_order()`.
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.clarity,
            self.impact,
            self.logic,
            self.innovation,
            self.market,
        ]
    }
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Formats a score with at least one fractional digit: `100.0`, `61.1`, `62.25`.
pub fn format_overall(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}
