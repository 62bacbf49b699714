pub const SAMPLE_PITCHES: [&str; 2] = [
    "We are building an AI-powered healthcare assistant that reduces hospital workload by 40% and improves patient monitoring accuracy.",
    "A fintech startup enabling rural businesses to access microloans using AI credit scoring.",
];

/// One-based lookup, matching the numbering printed by `examples`.
pub fn sample_pitch(idx: usize) -> Option<&'static str> {
    idx.checked_sub(1).and_then(|i| SAMPLE_PITCHES.get(i)).copied()
}
